use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// `if (!x) A else B` or `if (a != b) A else B`: swapping the branches removes
/// the negation.
pub struct InvertedLogic;

impl Checker for InvertedLogic {
    fn name(&self) -> &'static str {
        "InvertedLogic"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let m = tok.matches("if (*)@cond {*} else !if");
        let Some(condition) = m.get("cond").and_then(|paren| paren.ast_operand2()) else {
            return;
        };
        if matches!(condition.str(), "!" | "!=") {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "It is cleaner to invert the logic and swap the if and else branches.",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses};
    use crate::token::TokenListBuilder;

    #[test]
    fn flags_negated_condition_with_else() {
        // `(` carries `if` and the condition as operands.
        let list = TokenListBuilder::from_words("if ( ! x ) { a ; } else { b ; }")
            .binary(1, 0, 2)
            .unary(2, 3)
            .build()
            .unwrap();
        assert_offenses(&InvertedLogic, &list, &[0]);
    }

    #[test]
    fn flags_not_equal_condition() {
        let list = TokenListBuilder::from_words("if ( a != b ) { } else { }")
            .binary(1, 0, 3)
            .binary(3, 2, 4)
            .build()
            .unwrap();
        assert_offenses(&InvertedLogic, &list, &[0]);
    }

    #[test]
    fn ignores_else_if() {
        let list = TokenListBuilder::from_words("if ( ! x ) { } else if ( y ) { }")
            .binary(1, 0, 2)
            .unary(2, 3)
            .build()
            .unwrap();
        assert_no_offenses(&InvertedLogic, &list);
    }

    #[test]
    fn ignores_plain_condition() {
        let list = TokenListBuilder::from_words("if ( x ) { } else { }")
            .binary(1, 0, 2)
            .build()
            .unwrap();
        assert_no_offenses(&InvertedLogic, &list);
    }
}
