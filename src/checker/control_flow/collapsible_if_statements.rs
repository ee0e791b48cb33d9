use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct CollapsibleIfStatements;

impl Checker for CollapsibleIfStatements {
    fn name(&self) -> &'static str {
        "CollapsibleIfStatements"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("if (*) { if (*) {*} }").matched() {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "These two if statements can be collapsed into one.",
            ));
        }
    }
}
