use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptySwitchStatement;

impl Checker for EmptySwitchStatement {
    fn name(&self) -> &'static str {
        "EmptySwitchStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("switch (*) { }").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty switch statement."));
        }
    }
}
