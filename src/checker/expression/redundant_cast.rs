use crate::checker::util::{same_tokens, variable_type_range};
use crate::checker::{Checker, CheckerConfig};
use crate::diagnostic::Diagnostic;
use crate::token::Tok;

/// Qualifiers ignored when comparing the cast type with the declared type.
const QUALIFIERS: &[&str] = &["const", "volatile"];

/// `static_cast<T>(v)` where `v` is already declared as `T`.
pub struct RedundantCast;

impl Checker for RedundantCast {
    fn name(&self) -> &'static str {
        "RedundantCast"
    }

    fn check_token(&self, tok: Tok<'_>, config: &CheckerConfig, diagnostics: &mut Vec<Diagnostic>) {
        let m = tok.matches("static_cast <*>@cast ( %var%@source )");
        let (Some(cast), Some(source)) = (m.get("cast"), m.get("source")) else {
            return;
        };
        let (Some(first), Some(last)) = (cast.next(), cast.link().and_then(|c| c.previous())) else {
            return;
        };
        if first.id() > last.id() {
            return;
        }
        let Some(declared) = variable_type_range(source) else {
            return;
        };
        if same_tokens((first, last), declared, QUALIFIERS) {
            diagnostics.push(self.diagnostic(
                tok,
                config,
                &format!("Redundant cast: `{}` already has the target type.", source.str()),
            ));
        }
    }
}
