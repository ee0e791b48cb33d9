use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

fn is_unary(tok: Tok<'_>) -> bool {
    tok.ast_operand1().is_some() && tok.ast_operand2().is_none()
}

/// `!!x`, `- -x` and friends.
pub struct MultipleUnaryOperator;

impl Checker for MultipleUnaryOperator {
    fn name(&self) -> &'static str {
        "MultipleUnaryOperator"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let Some(inner) = tok.matches("+|-|!|~ +|-|!|~@inner").get("inner") else {
            return;
        };
        if is_unary(tok) && is_unary(inner) && inner.ast_parent() == Some(tok) {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "Multiple unary operators applied to one expression.",
            ));
        }
    }
}
