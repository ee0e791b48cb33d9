use rayon::prelude::*;

use crate::checker::registry::CheckerRegistry;
use crate::checker::walker::BatchedCheckerWalker;
use crate::checker::{Checker, CheckerConfig};
use crate::config::ResolvedConfig;
use crate::diagnostic::Diagnostic;
use crate::token::TokenList;

pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    pub list_count: usize,
}

/// Pair every enabled checker with its resolved config.
fn enabled_checkers<'r>(
    registry: &'r CheckerRegistry,
    config: &ResolvedConfig,
) -> Vec<(&'r dyn Checker, CheckerConfig)> {
    registry
        .checkers()
        .iter()
        .filter(|c| config.is_checker_enabled(c.name()))
        .map(|c| (&**c, config.checker_config(c.name())))
        .collect()
}

fn lint_with(list: &TokenList, checkers: &[(&dyn Checker, CheckerConfig)]) -> Vec<Diagnostic> {
    let mut walker = BatchedCheckerWalker::new(checkers.iter().map(|(c, cc)| (*c, cc)).collect());
    walker.walk(list);
    walker.into_diagnostics()
}

/// Run every enabled checker over one token list. Diagnostics are sorted by
/// (path, line, column).
pub fn lint_tokens(
    list: &TokenList,
    registry: &CheckerRegistry,
    config: &ResolvedConfig,
) -> Vec<Diagnostic> {
    let checkers = enabled_checkers(registry, config);
    let mut sorted = lint_with(list, &checkers);
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    tracing::debug!(
        "{}: {} checkers, {} diagnostics",
        list.path(),
        checkers.len(),
        sorted.len()
    );
    sorted
}

/// Lint independent token lists in parallel.
pub fn lint_all(
    lists: &[TokenList],
    registry: &CheckerRegistry,
    config: &ResolvedConfig,
) -> LintResult {
    let wall_start = std::time::Instant::now();
    let checkers = enabled_checkers(registry, config);

    let diagnostics: Vec<Diagnostic> = lists
        .par_iter()
        .flat_map(|list| lint_with(list, &checkers))
        .collect();

    let mut sorted = diagnostics;
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    tracing::debug!(
        "linted {} token lists with {} checkers in {:.0?}: {} diagnostics",
        lists.len(),
        checkers.len(),
        wall_start.elapsed(),
        sorted.len()
    );

    LintResult {
        diagnostics: sorted,
        list_count: lists.len(),
    }
}
