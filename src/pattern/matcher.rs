//! Pattern evaluation against the token graph.
//!
//! Atoms are tried strictly left to right against consecutive tokens with no
//! backtracking: an alternation commits to its first matching branch and a
//! forward search stops at the first hit.

use super::Pattern;
use super::parser::{AtomExpr, AtomKind, Bracket, WildcardClass};
use super::result::MatchResult;
use crate::token::Tok;
use crate::token::walk::{SEARCH_SKIP, forward};

impl WildcardClass {
    pub fn evaluate(self, tok: Tok<'_>) -> Option<Tok<'_>> {
        let hit = match self {
            Self::Any => true,
            Self::Assign => tok.is_assignment_op(),
            Self::Comp => tok.is_comparison_op(),
            Self::Name => tok.is_name(),
            Self::Op => tok.is_op(),
            Self::Or => tok.str() == "|",
            Self::OrOr => tok.str() == "||",
            Self::Var => tok.variable_id().is_some(),
        };
        hit.then_some(tok)
    }
}

impl Bracket {
    /// The partner delimiter when `tok` opens this kind of group. Round, square
    /// and curly brackets are always linked by the front end; angle brackets only
    /// when they are template brackets, so an unlinked `<` does not match.
    pub fn evaluate(self, tok: Tok<'_>) -> Option<Tok<'_>> {
        if tok.str() != self.open() {
            return None;
        }
        tok.link()
    }
}

impl AtomExpr {
    /// Token consumed when this expression matches at `tok`: usually `tok`
    /// itself, the partner for a bracket skip, the hit for a forward search.
    pub fn evaluate<'a>(&self, tok: Option<Tok<'a>>) -> Option<Tok<'a>> {
        let tok = tok?;
        if self.text.is_empty() {
            return None;
        }
        if tok.str() == &*self.text {
            return Some(tok);
        }
        match &self.kind {
            AtomKind::Literal => None,
            AtomKind::Class(class) => class.evaluate(tok),
            AtomKind::Bracket(bracket) => bracket.evaluate(tok),
            AtomKind::Alternation(alternatives) => {
                alternatives.iter().find_map(|alt| alt.evaluate(Some(tok)))
            }
            AtomKind::Negation(inner) => match inner.evaluate(Some(tok)) {
                Some(_) => None,
                None => Some(tok),
            },
            AtomKind::Search(inner) => forward(Some(tok))
                .skipping(SEARCH_SKIP)
                .find(|&t| inner.evaluate(Some(t)).is_some()),
        }
    }
}

impl Pattern {
    /// Match this pattern starting at `start`.
    pub fn matches<'a>(&self, start: Option<Tok<'a>>) -> MatchResult<'a> {
        let mut captures = vec![None; self.table.names.len()];
        let mut cursor = start;
        let mut end = None;

        for atom in &self.atoms {
            let Some(hit) = atom.expr.evaluate(cursor) else {
                return MatchResult::failure(self.table.clone());
            };
            if let Some(slot) = atom.slot {
                captures[slot] = cursor;
            }
            end = Some(hit);
            cursor = hit.next();
        }

        match end {
            Some(end) => MatchResult::success(self.table.clone(), end, captures),
            None => MatchResult::failure(self.table.clone()),
        }
    }
}
