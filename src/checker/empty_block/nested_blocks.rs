use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// A bare `{ ... }` block opened as a statement directly inside another block.
pub struct NestedBlocks;

impl Checker for NestedBlocks {
    fn name(&self) -> &'static str {
        "NestedBlocks"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let Some(block) = tok.matches("{|; {@block").get("block") else {
            return;
        };
        // Initializer lists hang off `=` or `,` in the expression tree.
        if block.ast_parent().is_none() {
            diagnostics.push(self.diagnostic(block, config, "Block directly inside block."));
        }
    }
}
