use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct EmptyElseBlock;

impl Checker for EmptyElseBlock {
    fn name(&self) -> &'static str {
        "EmptyElseBlock"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("else { }").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Empty else block."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};

    #[test]
    fn flags_empty_else() {
        assert_offenses(&EmptyElseBlock, &tokens("if ( x ) { f ( ) ; } else { }"), &[10]);
    }

    #[test]
    fn ignores_else_if() {
        assert_no_offenses(&EmptyElseBlock, &tokens("if ( x ) { } else if ( y ) { }"));
    }
}
