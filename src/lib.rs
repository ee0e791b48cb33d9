//! Token-pattern query engine and style checkers over a C/C++ token graph.
//!
//! The front end (tokenizer, simplifier, expression-tree builder) is external.
//! It hands over a [`token::TokenList`], either built with
//! [`token::TokenListBuilder`] or loaded from a JSON dump with
//! [`token::dump::load_dump`]. Checkers in [`checker`] query that graph with
//! compact textual patterns (see [`pattern`]) and the [`linter`] runs them.

pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod linter;
pub mod pattern;
pub mod token;

#[cfg(test)]
pub mod testutil;

use std::path::Path;

use anyhow::Result;

use checker::registry::CheckerRegistry;
use config::load_config;
use linter::{LintResult, lint_all};
use token::dump::load_dump;

/// Load every dump in `dumps`, then lint them all with the default registry and
/// the config at `config_path` (or `.tokcop.yml` in the current directory).
pub fn run_dumps(dumps: &[&Path], config_path: Option<&Path>) -> Result<LintResult> {
    let config = load_config(config_path)?;
    let registry = CheckerRegistry::default_registry();
    let lists = dumps
        .iter()
        .map(|path| load_dump(path))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("{} dumps loaded, {} checkers registered", lists.len(), registry.len());
    Ok(lint_all(&lists, &registry, &config))
}
