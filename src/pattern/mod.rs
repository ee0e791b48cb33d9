//! Token pattern language: lexer, compiler, matcher and result type.
//!
//! A pattern is a space-separated list of words matched against consecutive
//! tokens. Each word is one of:
//!
//! - a literal token text, e.g. `if`, `;`
//! - a wildcard class: `%any%`, `%assign%`, `%comp%`, `%name%`, `%op%`,
//!   `%or%` (`|`), `%oror%` (`||`), `%var%`
//! - a bracket skip: `(*)`, `[*]`, `{*}`, `<*>`, consuming through the partner
//! - an alternation `a|b|c`, a negation `!expr`, or a forward search `*expr`
//!
//! and may end in `@name` to capture the token it started at.
//!
//! ```
//! use tokcop::token::TokenListBuilder;
//!
//! let list = TokenListBuilder::from_words("if ( x ) { }").build().unwrap();
//! let m = list.first().unwrap().matches("if (*)@cond { }");
//! assert!(m.matched());
//! assert_eq!(m.get("cond").unwrap().str(), "(");
//! assert_eq!(m.end().unwrap().str(), "}");
//! ```

pub mod cache;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod result;

use std::sync::Arc;

pub use error::PatternError;
pub use lexer::{Lexer, Word};
pub use parser::{Atom, AtomExpr, AtomKind, Bracket, Parser, WildcardClass};
pub use result::MatchResult;

use crate::token::Tok;
use result::BindingTable;

/// A compiled pattern. Cheap to match repeatedly; see [`cache`] for sharing
/// compiled patterns by source string.
#[derive(Debug)]
pub struct Pattern {
    atoms: Vec<Atom>,
    table: Arc<BindingTable>,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let words = Lexer::new(source).tokenize();
        let (atoms, names) = Parser::new(source, words).parse()?;
        Ok(Self {
            atoms,
            table: Arc::new(BindingTable {
                source: source.into(),
                names: names.into_boxed_slice(),
            }),
        })
    }

    pub fn source(&self) -> &str {
        &self.table.source
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Binding names in declaration order.
    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.table.names.iter().map(|n| &**n)
    }
}

/// Match `source` at `start`, compiling through the process-wide cache.
///
/// A malformed pattern is logged once when first compiled and then never
/// matches; use [`Pattern::compile`] to handle the error directly.
pub fn match_pattern<'a>(start: Option<Tok<'a>>, source: &str) -> MatchResult<'a> {
    match cache::global().get_or_compile(source) {
        Ok(pattern) => pattern.matches(start),
        Err(_) => MatchResult::malformed(),
    }
}
