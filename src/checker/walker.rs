use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::TokenList;

/// Runs a single checker over every token of a list.
pub struct CheckerWalker<'a> {
    pub checker: &'a dyn Checker,
    pub config: &'a CheckerConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CheckerWalker<'a> {
    pub fn new(checker: &'a dyn Checker, config: &'a CheckerConfig) -> Self {
        Self {
            checker,
            config,
            diagnostics: Vec::new(),
        }
    }

    pub fn walk(&mut self, list: &TokenList) {
        for tok in list.iter() {
            self.checker.check_token(tok, self.config, &mut self.diagnostics);
        }
    }
}

/// Runs many checkers in one pass over the list: each token is offered to
/// every checker before moving on.
pub struct BatchedCheckerWalker<'a> {
    checkers: Vec<(&'a dyn Checker, &'a CheckerConfig)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> BatchedCheckerWalker<'a> {
    pub fn new(checkers: Vec<(&'a dyn Checker, &'a CheckerConfig)>) -> Self {
        Self {
            checkers,
            diagnostics: Vec::new(),
        }
    }

    pub fn walk(&mut self, list: &TokenList) {
        for tok in list.iter() {
            for (checker, config) in &self.checkers {
                checker.check_token(tok, config, &mut self.diagnostics);
            }
        }
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
