use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_yml::Value;

use crate::checker::CheckerConfig;
use crate::diagnostic::Severity;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = ".tokcop.yml";

/// Resolved configuration from `.tokcop.yml`:
///
/// ```yaml
/// AllCheckers:
///   Enabled: true
/// Checkers:
///   GotoStatement:
///     Enabled: false
///   NestedBlocks:
///     Severity: warning
/// ```
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Per-checker configs keyed by checker name (e.g. "GotoStatement")
    checker_configs: HashMap<String, CheckerConfig>,
    /// `AllCheckers.Enabled`, applied to checkers without their own `Enabled`.
    default_enabled: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            checker_configs: HashMap::new(),
            default_enabled: true,
        }
    }
}

/// Load config from the given path, or look for `.tokcop.yml` in the current
/// directory. Returns an empty config if the file doesn't exist.
pub fn load_config(path: Option<&Path>) -> Result<ResolvedConfig> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => Path::new(CONFIG_FILE).to_path_buf(),
    };

    if !config_path.exists() {
        tracing::debug!("no config at {}, using defaults", config_path.display());
        return Ok(ResolvedConfig::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config {}", config_path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("failed to parse config {}", config_path.display()))
}

/// Parse config from YAML text. An empty document is an empty config.
pub fn parse_config(contents: &str) -> Result<ResolvedConfig> {
    let raw: Value = serde_yml::from_str(contents)?;
    let mut config = ResolvedConfig::default();

    let Value::Mapping(map) = &raw else {
        return Ok(config);
    };

    for (key, value) in map {
        match key.as_str() {
            Some("AllCheckers") => {
                if let Some(enabled) = mapping_get(value, "Enabled").and_then(Value::as_bool) {
                    config.default_enabled = enabled;
                }
            }
            Some("Checkers") => {
                let Some(checkers) = value.as_mapping() else {
                    anyhow::bail!("`Checkers` must be a mapping of checker names");
                };
                for (name, checker_value) in checkers {
                    let Some(name) = name.as_str() else {
                        continue;
                    };
                    config
                        .checker_configs
                        .insert(name.to_string(), parse_checker_config(name, checker_value));
                }
            }
            _ => {}
        }
    }

    // Checkers without their own `Enabled` follow `AllCheckers.Enabled`.
    for (name, value) in checker_entries(&raw) {
        if mapping_get(value, "Enabled").is_none() {
            if let Some(cc) = config.checker_configs.get_mut(name) {
                cc.enabled = config.default_enabled;
            }
        }
    }

    tracing::debug!(
        "config: {} checker entries, default enabled: {}",
        config.checker_configs.len(),
        config.default_enabled
    );
    Ok(config)
}

impl ResolvedConfig {
    pub fn is_checker_enabled(&self, name: &str) -> bool {
        match self.checker_configs.get(name) {
            Some(config) => config.enabled,
            None => self.default_enabled,
        }
    }

    /// Get the resolved config for a specific checker.
    pub fn checker_config(&self, name: &str) -> CheckerConfig {
        self.checker_configs
            .get(name)
            .cloned()
            .unwrap_or_else(|| CheckerConfig {
                enabled: self.default_enabled,
                ..CheckerConfig::default()
            })
    }
}

fn parse_checker_config(name: &str, value: &Value) -> CheckerConfig {
    let mut config = CheckerConfig::default();

    let Value::Mapping(map) = value else {
        return config;
    };
    for (k, v) in map {
        match k.as_str() {
            Some("Enabled") => {
                if let Some(b) = v.as_bool() {
                    config.enabled = b;
                }
            }
            Some("Severity") => {
                let Some(s) = v.as_str() else {
                    continue;
                };
                config.severity = Severity::from_str(s);
                if config.severity.is_none() {
                    tracing::warn!("{name}: unknown severity `{s}`, using the checker default");
                }
            }
            _ => {}
        }
    }

    config
}

fn mapping_get<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    value.as_mapping()?.get(&Value::String(key.to_string()))
}

fn checker_entries(raw: &Value) -> impl Iterator<Item = (&str, &Value)> {
    mapping_get(raw, "Checkers")
        .and_then(Value::as_mapping)
        .into_iter()
        .flat_map(|m| m.iter())
        .filter_map(|(k, v)| Some((k.as_str()?, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_returns_empty() {
        let config = load_config(Some(Path::new("/nonexistent/.tokcop.yml"))).unwrap();
        assert!(config.is_checker_enabled("GotoStatement"));
        let cc = config.checker_config("GotoStatement");
        assert!(cc.enabled);
        assert!(cc.severity.is_none());
    }

    #[test]
    fn checker_enabled_false() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "Checkers:\n  GotoStatement:\n    Enabled: false\n");
        let config = load_config(Some(path.as_path())).unwrap();
        assert!(!config.is_checker_enabled("GotoStatement"));
        // Unknown checkers default to enabled
        assert!(config.is_checker_enabled("NestedBlocks"));
    }

    #[test]
    fn checker_severity_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "Checkers:\n  NestedBlocks:\n    Severity: Warning\n");
        let config = load_config(Some(path.as_path())).unwrap();
        let cc = config.checker_config("NestedBlocks");
        assert!(cc.enabled);
        assert_eq!(cc.severity, Some(Severity::Warning));
    }

    #[test]
    fn unknown_severity_is_ignored() {
        let config = parse_config("Checkers:\n  NestedBlocks:\n    Severity: loud\n").unwrap();
        assert_eq!(config.checker_config("NestedBlocks").severity, None);
    }

    #[test]
    fn all_checkers_disabled_by_default() {
        let config = parse_config(
            "AllCheckers:\n  Enabled: false\nCheckers:\n  GotoStatement:\n    Enabled: true\n  NestedBlocks:\n    Severity: error\n",
        )
        .unwrap();
        assert!(config.is_checker_enabled("GotoStatement"));
        assert!(!config.is_checker_enabled("NestedBlocks"));
        assert!(!config.is_checker_enabled("EmptyIfStatement"));
        assert!(!config.checker_config("EmptyIfStatement").enabled);
        assert_eq!(config.checker_config("NestedBlocks").severity, Some(Severity::Error));
    }

    #[test]
    fn empty_document_is_empty_config() {
        let config = parse_config("").unwrap();
        assert!(config.is_checker_enabled("GotoStatement"));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "Checkers: [unclosed\n");
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(format!("{err}").contains(".tokcop.yml"), "{err}");
    }

    #[test]
    fn checkers_must_be_a_mapping() {
        assert!(parse_config("Checkers:\n  - GotoStatement\n").is_err());
    }
}
