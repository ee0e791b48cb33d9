use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// A local declared, assigned once and returned straight away:
/// `T x ; x = expr ; return x ;`.
pub struct RedundantLocalVariable;

impl Checker for RedundantLocalVariable {
    fn name(&self) -> &'static str {
        "RedundantLocalVariable"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let m = tok.matches("%var%@decl ; %var%@assign = *; return %var%@ret ;");
        let (Some(decl), Some(assign), Some(ret)) = (m.get("decl"), m.get("assign"), m.get("ret"))
        else {
            return;
        };
        let var = decl.variable_id();
        if assign.variable_id() != var || ret.variable_id() != var {
            return;
        }
        let is_declaration = decl.variable().and_then(|v| v.name_token) == Some(decl.id());
        if is_declaration {
            diagnostics.push(self.diagnostic(
                decl,
                config,
                &format!("Variable `{}` is only assigned and returned.", decl.str()),
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
    fn flags_assign_then_return() {
        let list = TokenListBuilder::from_words("int x ; x = f ( ) ; return x ;")
            .variable(1, Some((0, 0)))
            .build()
            .unwrap();
        assert_offenses(&RedundantLocalVariable, &list, &[1]);
    }

    #[test]
    fn ignores_other_returned_variable() {
        let list = TokenListBuilder::from_words("int x ; x = 1 ; return y ;")
            .variable(1, Some((0, 0)))
            .variable(8, None)
            .build()
            .unwrap();
        assert_no_offenses(&RedundantLocalVariable, &list);
    }

    #[test]
    fn ignores_use_that_is_not_the_declaration() {
        // `x` is declared elsewhere; this is a plain statement followed by an
        // assignment.
        let list = TokenListBuilder::from_words("int x ; f ( ) ; x ; x = 1 ; return x ;")
            .variable(1, Some((0, 0)))
            .build()
            .unwrap();
        assert_no_offenses(&RedundantLocalVariable, &list);
    }
}
