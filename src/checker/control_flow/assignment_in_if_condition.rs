use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::{Diagnostic, Severity};
use crate::token::Tok;
use crate::token::walk::{SEARCH_SKIP, forward};

/// An assignment operator directly inside an `if` condition. Assignments
/// wrapped in an extra pair of parentheses are taken as intentional and the
/// search skips over them.
pub struct AssignmentInIfCondition;

impl Checker for AssignmentInIfCondition {
    fn name(&self) -> &'static str {
        "AssignmentInIfCondition"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let Some(paren) = tok.matches("if (@paren").get("paren") else {
            return;
        };
        let Some(close) = paren.link() else {
            return;
        };
        let assign = forward(paren.next())
            .until(Some(close))
            .skipping(SEARCH_SKIP)
            .find(|t| t.is_assignment_op());
        if let Some(assign) = assign {
            diagnostics.push(self.diagnostic(
                assign,
                config,
                "Assignment in if condition; did you mean `==`?",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, run_checker, tokens};

    #[test]
    fn flags_assignment_in_condition() {
        let list = tokens("if ( x = f ( ) ) { }");
        assert_offenses(&AssignmentInIfCondition, &list, &[3]);
        assert_eq!(run_checker(&AssignmentInIfCondition, &list)[0].severity, Severity::Warning);
    }

    #[test]
    fn flags_compound_assignment() {
        assert_offenses(&AssignmentInIfCondition, &tokens("if ( n += 1 ) { }"), &[3]);
    }

    #[test]
    fn ignores_comparison() {
        assert_no_offenses(&AssignmentInIfCondition, &tokens("if ( x == 1 ) { }"));
    }

    #[test]
    fn ignores_assignment_in_body() {
        assert_no_offenses(&AssignmentInIfCondition, &tokens("if ( x ) { y = 1 ; }"));
    }

    #[test]
    fn ignores_assignment_after_condition() {
        assert_no_offenses(&AssignmentInIfCondition, &tokens("if ( x ) y = 1 ;"));
        assert_no_offenses(&AssignmentInIfCondition, &tokens("if ( x ) { } z = 2 ;"));
    }

    #[test]
    fn flags_assignment_after_a_call() {
        assert_offenses(&AssignmentInIfCondition, &tokens("if ( f ( a ) , d = e ) { }"), &[8]);
    }

    #[test]
    fn ignores_parenthesized_assignment() {
        assert_no_offenses(&AssignmentInIfCondition, &tokens("if ( ( x = f ( ) ) ) { }"));
    }
}
