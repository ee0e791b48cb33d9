use crate::checker::util::last_branch_statement;
use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// Flags a `for`/`while` body whose last statement is `break`, `continue` or
/// `return`. A loop that always branches out on its last line reads like a
/// loop that never loops.
pub struct AvoidBranchingStatementAsLastInLoop;

impl Checker for AvoidBranchingStatementAsLastInLoop {
    fn name(&self) -> &'static str {
        "AvoidBranchingStatementAsLastInLoop"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let Some(body_end) = tok.matches("for|while (*) {*}").end() else {
            return;
        };
        if let Some(stmt) = last_branch_statement(body_end, "break|continue|return") {
            diagnostics.push(self.diagnostic(
                stmt,
                config,
                "Branching statement as the last statement inside a loop is very confusing.",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};
    use crate::token::TokenListBuilder;

    #[test]
    fn flags_trailing_break() {
        let list = tokens("for ( ; ; ) { if ( x ) { continue ; } break ; }");
        assert_offenses(&AvoidBranchingStatementAsLastInLoop, &list, &[14]);
    }

    #[test]
    fn flags_trailing_continue_in_while() {
        let list = tokens("while ( x ) { f ( ) ; continue ; }");
        assert_offenses(&AvoidBranchingStatementAsLastInLoop, &list, &[9]);
    }

    #[test]
    fn flags_return_with_expression() {
        // while ( x ) { return x + 1 ; }
        let list = TokenListBuilder::from_words("while ( x ) { return x + 1 ; }")
            .binary(7, 6, 8)
            .unary(5, 7)
            .build()
            .unwrap();
        assert_offenses(&AvoidBranchingStatementAsLastInLoop, &list, &[5]);
    }

    #[test]
    fn ignores_branch_earlier_in_body() {
        let list = tokens("for ( ; ; ) { if ( x ) { break ; } f ( ) ; }");
        assert_no_offenses(&AvoidBranchingStatementAsLastInLoop, &list);
    }

    #[test]
    fn ignores_non_loop_blocks() {
        let list = tokens("if ( x ) { break ; }");
        assert_no_offenses(&AvoidBranchingStatementAsLastInLoop, &list);
    }
}
