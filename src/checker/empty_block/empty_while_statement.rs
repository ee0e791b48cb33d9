use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptyWhileStatement;

impl Checker for EmptyWhileStatement {
    fn name(&self) -> &'static str {
        "EmptyWhileStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("while (*) { }").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty while statement."));
        }
    }
}
