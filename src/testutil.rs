use crate::checker::walker::CheckerWalker;
use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::{TokenList, TokenListBuilder};

/// Token list from whitespace-separated words, brackets paired by nesting.
pub fn tokens(text: &str) -> TokenList {
    TokenListBuilder::from_words(text)
        .build()
        .unwrap_or_else(|e| panic!("bad test input {text:?}: {e}"))
}

/// Run a checker over every token and return the diagnostics.
pub fn run_checker(checker: &dyn Checker, list: &TokenList) -> Vec<Diagnostic> {
    run_checker_with_config(checker, list, &CheckerConfig::default())
}

pub fn run_checker_with_config(
    checker: &dyn Checker,
    list: &TokenList,
    config: &CheckerConfig,
) -> Vec<Diagnostic> {
    let mut walker = CheckerWalker::new(checker, config);
    walker.walk(list);
    walker.diagnostics
}

/// Assert the checker fires exactly at the tokens at positions `expected`,
/// in order.
pub fn assert_offenses(checker: &dyn Checker, list: &TokenList, expected: &[usize]) {
    let diagnostics = run_checker(checker, list);
    let actual: Vec<usize> = diagnostics.iter().map(|d| d.anchor.index()).collect();
    assert_eq!(
        actual,
        expected,
        "{} anchors mismatch\nExpected at: {}\nActual:\n{}",
        checker.name(),
        describe_positions(list, expected),
        format_diagnostics(&diagnostics),
    );
    for d in &diagnostics {
        assert_eq!(d.checker, checker.name());
    }
}

/// Assert a checker produces no diagnostics on the list.
pub fn assert_no_offenses(checker: &dyn Checker, list: &TokenList) {
    let diagnostics = run_checker(checker, list);
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics but got {}:\n{}",
        diagnostics.len(),
        format_diagnostics(&diagnostics),
    );
}

fn describe_positions(list: &TokenList, positions: &[usize]) -> String {
    positions
        .iter()
        .map(|&i| match list.at(i) {
            Some(tok) => format!("{i}:{:?}", tok.str()),
            None => format!("{i}:<out of range>"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  #{} {d}", d.anchor.index()))
        .collect::<Vec<_>>()
        .join("\n")
}
