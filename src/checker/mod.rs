pub mod control_flow;
pub mod empty_block;
pub mod expression;
pub mod registry;
pub mod util;
pub mod walker;

use crate::diagnostic::{Diagnostic, Location, Severity};
use crate::token::Tok;

/// Per-checker configuration extracted from `.tokcop.yml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub enabled: bool,
    pub severity: Option<Severity>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: None,
        }
    }
}

/// A style rule over a token list. Implementations must be Send + Sync so they
/// can be shared across rayon worker threads.
pub trait Checker: Send + Sync {
    /// Stable checker name, e.g. "GotoStatement".
    fn name(&self) -> &'static str;

    fn default_severity(&self) -> Severity {
        Severity::Style
    }

    /// Called once for every token of the list, in source order.
    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>);

    /// Build a diagnostic anchored at `tok`, honoring a configured severity.
    fn diagnostic(&self, tok: Tok<'_>, config: &CheckerConfig, message: &str) -> Diagnostic {
        Diagnostic {
            path: tok.list().path().to_string(),
            location: Location {
                line: tok.line(),
                column: tok.column(),
            },
            severity: config.severity.unwrap_or_else(|| self.default_severity()),
            checker: self.name().to_string(),
            message: message.to_string(),
            anchor: tok.id(),
        }
    }
}
