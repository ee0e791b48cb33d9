use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// `x == true`, `false != y` and other comparisons against a boolean literal.
/// Reported once per operator, whichever side the literal is on.
pub struct ComparisonWithBool;

const MESSAGE: &str = "Comparison with a boolean literal is redundant.";

impl Checker for ComparisonWithBool {
    fn name(&self) -> &'static str {
        "ComparisonWithBool"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("%comp% true|false").matched() {
            diagnostics.push(self.diagnostic(tok, config, MESSAGE));
            return;
        }
        let Some(op) = tok.matches("true|false %comp%@op").get("op") else {
            return;
        };
        // `true == false` is reported from the operator itself.
        if !op.matches("%comp% true|false").matched() {
            diagnostics.push(self.diagnostic(op, config, MESSAGE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};

    #[test]
    fn flags_literal_on_right() {
        assert_offenses(&ComparisonWithBool, &tokens("if ( x == true )"), &[3]);
    }

    #[test]
    fn flags_literal_on_left() {
        assert_offenses(&ComparisonWithBool, &tokens("if ( false != x )"), &[3]);
    }

    #[test]
    fn reports_once_with_literals_on_both_sides() {
        assert_offenses(&ComparisonWithBool, &tokens("if ( true == false )"), &[3]);
    }

    #[test]
    fn ignores_assignment_of_literal() {
        assert_no_offenses(&ComparisonWithBool, &tokens("x = true ;"));
    }
}
