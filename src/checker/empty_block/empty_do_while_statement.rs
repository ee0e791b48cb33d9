use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptyDoWhileStatement;

impl Checker for EmptyDoWhileStatement {
    fn name(&self) -> &'static str {
        "EmptyDoWhileStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("do { } while (").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty do-while statement."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};

    #[test]
    fn flags_empty_body() {
        assert_offenses(&EmptyDoWhileStatement, &tokens("do { } while ( x ) ;"), &[0]);
    }

    #[test]
    fn ignores_body_with_statement() {
        assert_no_offenses(&EmptyDoWhileStatement, &tokens("do { x ; } while ( y ) ;"));
    }
}
