use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct RedundantConditionalOperator;

impl Checker for RedundantConditionalOperator {
    fn name(&self) -> &'static str {
        "RedundantConditionalOperator"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("? true|false : true|false").matched() {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "Conditional operator is redundant; use the condition directly.",
            ));
        }
    }
}
