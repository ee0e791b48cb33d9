use crate::checker::util::last_branch_statement;
use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// An `else` block after an `if` body that always leaves the enclosing scope.
pub struct UnnecessaryElseStatement;

impl Checker for UnnecessaryElseStatement {
    fn name(&self) -> &'static str {
        "UnnecessaryElseStatement"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let m = tok.matches("if (*) {*} else@else {");
        let Some(else_tok) = m.get("else") else {
            return;
        };
        let Some(body_end) = else_tok.previous() else {
            return;
        };
        if last_branch_statement(body_end, "return|throw|break|continue").is_some() {
            diagnostics.push(self.diagnostic(
                else_tok,
                config,
                "Else statement is not necessary.",
            ));
        }
    }
}
