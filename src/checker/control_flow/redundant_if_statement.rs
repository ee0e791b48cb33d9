use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct RedundantIfStatement;

impl Checker for RedundantIfStatement {
    fn name(&self) -> &'static str {
        "RedundantIfStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok
            .matches("if (*) { return true|false ; } else { return true|false ; }")
            .matched()
        {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "The if statement is redundant; return the condition directly.",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};

    #[test]
    fn flags_boolean_returns() {
        let list = tokens("if ( x ) { return true ; } else { return false ; }");
        assert_offenses(&RedundantIfStatement, &list, &[0]);
    }

    #[test]
    fn ignores_non_literal_returns() {
        let list = tokens("if ( x ) { return y ; } else { return false ; }");
        assert_no_offenses(&RedundantIfStatement, &list);
    }
}
