use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// `for ( ; cond ; )` has neither init nor increment and is a `while` loop in
/// disguise. `for ( ; ; )` is left alone.
pub struct ForLoopShouldBeWhileLoop;

impl Checker for ForLoopShouldBeWhileLoop {
    fn name(&self) -> &'static str {
        "ForLoopShouldBeWhileLoop"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        if tok.matches("for ( ; !; *; )").matched() {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                "Use a while loop instead of a for loop without initialization and increment.",
            ));
        }
    }
}
