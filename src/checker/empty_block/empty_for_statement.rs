use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptyForStatement;

impl Checker for EmptyForStatement {
    fn name(&self) -> &'static str {
        "EmptyForStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("for (*) { }").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty for statement."));
        }
    }
}
