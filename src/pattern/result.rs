use std::sync::Arc;

use super::error::PatternError;
use crate::token::Tok;

/// Binding names of one compiled pattern, shared with every result it produces.
#[derive(Debug)]
pub(crate) struct BindingTable {
    pub(crate) source: Box<str>,
    pub(crate) names: Box<[Box<str>]>,
}

impl BindingTable {
    fn slot(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| &**n == name)
    }
}

/// Outcome of matching a pattern at one token.
///
/// A failed match is an ordinary value: every declared binding reads as `None`.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    table: Option<Arc<BindingTable>>,
    end: Option<Tok<'a>>,
    captures: Vec<Option<Tok<'a>>>,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn success(
        table: Arc<BindingTable>,
        end: Tok<'a>,
        captures: Vec<Option<Tok<'a>>>,
    ) -> Self {
        Self {
            table: Some(table),
            end: Some(end),
            captures,
        }
    }

    pub(crate) fn failure(table: Arc<BindingTable>) -> Self {
        let captures = vec![None; table.names.len()];
        Self {
            table: Some(table),
            end: None,
            captures,
        }
    }

    /// Result for a pattern that failed to compile.
    pub(crate) fn malformed() -> Self {
        Self {
            table: None,
            end: None,
            captures: Vec::new(),
        }
    }

    pub fn matched(&self) -> bool {
        self.end.is_some()
    }

    /// Token consumed by the last atom (the partner delimiter for a trailing
    /// bracket skip). `None` when the match failed.
    pub fn end(&self) -> Option<Tok<'a>> {
        self.end
    }

    /// Token captured under `name`. `None` when the match failed or the pattern
    /// declares no such binding.
    pub fn get(&self, name: &str) -> Option<Tok<'a>> {
        let slot = self.table.as_ref()?.slot(name)?;
        self.captures[slot]
    }

    /// Like [`get`](Self::get), but a name the pattern never declared is an error.
    pub fn binding(&self, name: &str) -> Result<Option<Tok<'a>>, PatternError> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        match table.slot(name) {
            Some(slot) => Ok(self.captures[slot]),
            None => Err(PatternError::UnknownBinding {
                pattern: table.source.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Every declared binding with its capture, in declaration order.
    pub fn captures(&self) -> impl Iterator<Item = (&str, Option<Tok<'a>>)> + '_ {
        let names = self.table.as_deref().map(|t| &t.names[..]).unwrap_or(&[]);
        names
            .iter()
            .zip(self.captures.iter())
            .map(|(name, tok)| (&**name, *tok))
    }
}
