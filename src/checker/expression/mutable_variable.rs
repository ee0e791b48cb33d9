use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

pub struct MutableVariable;

impl Checker for MutableVariable {
    fn name(&self) -> &'static str {
        "MutableVariable"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("mutable %name%").matched() {
            diagnostics.push(self.diagnostic(tok, config, "Avoid mutable member variables."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{assert_no_offenses, assert_offenses, tokens};

    #[test]
    fn flags_mutable_member() {
        let list = tokens("class C { mutable int hits ; } ;");
        assert_offenses(&MutableVariable, &list, &[3]);
    }

    #[test]
    fn ignores_mutable_lambda() {
        assert_no_offenses(&MutableVariable, &tokens("f = [ ] ( ) mutable { } ;"));
    }
}
