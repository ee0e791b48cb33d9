use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptyIfStatement;

impl Checker for EmptyIfStatement {
    fn name(&self) -> &'static str {
        "EmptyIfStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("if (*) { }").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty if statement."));
        }
    }
}
