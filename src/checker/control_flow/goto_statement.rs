use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct GotoStatement;

impl Checker for GotoStatement {
    fn name(&self) -> &'static str {
        "GotoStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("goto %name%").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Avoid goto statements."));
        }
    }
}
