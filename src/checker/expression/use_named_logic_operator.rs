use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// `&&`, `||` and `!` used as logic operators instead of `and`, `or`, `not`.
pub struct UseNamedLogicOperator;

fn named(op: &str) -> Option<&'static str> {
    match op {
        "&&" => Some("and"),
        "||" => Some("or"),
        "!" => Some("not"),
        _ => None,
    }
}

impl Checker for UseNamedLogicOperator {
    fn name(&self) -> &'static str {
        "UseNamedLogicOperator"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if !tok.matches("&&|%oror%|!").matched() {
            return;
        }
        // `&&` without operands is an rvalue reference, not a logic operator.
        if tok.ast_operand1().is_none() {
            return;
        }
        if let Some(name) = named(tok.str()) {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                &format!("Use `{name}` instead of `{}`.", tok.str()),
            ));
        }
    }
}
