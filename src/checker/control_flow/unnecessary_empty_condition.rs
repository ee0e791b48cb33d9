use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// `if (v.empty())` or `if (!v.empty())` whose whole body is a range-for over
/// `v`: the loop already does nothing on an empty container. The loop target
/// must be the same variable, not just the same spelling.
pub struct UnnecessaryEmptyCondition;

const PATTERNS: &[&str] = &[
    "if ( %var%@var . empty ( ) ) { for (*)@loop {*} }",
    "if ( ! %var%@var . empty ( ) ) { for (*)@loop {*} }",
];

impl Checker for UnnecessaryEmptyCondition {
    fn name(&self) -> &'static str {
        "UnnecessaryEmptyCondition"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let Some((var, paren)) = PATTERNS.iter().find_map(|pattern| {
            let m = tok.matches(pattern);
            Some((m.get("var")?, m.get("loop")?))
        }) else {
            return;
        };
        let Some(close) = paren.link() else {
            return;
        };
        let ranges_over_var = close
            .at(-1)
            .is_some_and(|t| t.variable_id().is_some() && t.variable_id() == var.variable_id())
            && close.at(-2).is_some_and(|t| t.str() == ":");
        if ranges_over_var {
            diagnostics.push(self.diagnostic(tok, config, "Empty condition is unnecessary."));
        }
    }
}
