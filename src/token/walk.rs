//! Lazy traversal over the token graph.
//!
//! Every walker borrows the list and yields [`Tok`] handles; dropping a walker
//! early abandons the scan. Walks that are given a skip list jump over whole
//! delimiter groups: when the current token's text is in the list and it has a
//! link, the next step continues from the partner instead of descending.

use super::Tok;

/// Opening delimiters a forward search jumps over. Braces are not among them,
/// so a search can reach into a following block.
pub const SEARCH_SKIP: &[&str] = &["(", "[", "<"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Iterator returned by [`forward`] and [`backward`].
#[derive(Debug, Clone)]
pub struct Walk<'a, 's> {
    cursor: Option<Tok<'a>>,
    end: Option<Tok<'a>>,
    skip: &'s [&'s str],
    direction: Direction,
}

impl<'a, 's> Walk<'a, 's> {
    /// Stop before `end` (exclusive). `None` walks to the end of the list. When
    /// `end` sits inside a skipped group, the walk stops after that group's
    /// opening token.
    pub fn until(mut self, end: Option<Tok<'a>>) -> Self {
        self.end = end;
        self
    }

    /// Jump over delimiter groups whose opening (or, walking backwards, closing)
    /// token text appears in `skip`.
    pub fn skipping<'t>(self, skip: &'t [&'t str]) -> Walk<'a, 't> {
        Walk {
            cursor: self.cursor,
            end: self.end,
            skip,
            direction: self.direction,
        }
    }
}

impl<'a> Iterator for Walk<'a, '_> {
    type Item = Tok<'a>;

    fn next(&mut self) -> Option<Tok<'a>> {
        let tok = self.cursor?;
        if self.end == Some(tok) {
            self.cursor = None;
            return None;
        }
        let from = if self.skip.iter().any(|s| *s == tok.str()) {
            tok.link().unwrap_or(tok)
        } else {
            tok
        };
        // A jump that passes over `end` finishes the walk.
        let jumped_end = self.end.is_some_and(|end| match self.direction {
            Direction::Forward => tok.id() < end.id() && end.id() <= from.id(),
            Direction::Backward => from.id() <= end.id() && end.id() < tok.id(),
        });
        self.cursor = if jumped_end {
            None
        } else {
            match self.direction {
                Direction::Forward => from.next(),
                Direction::Backward => from.previous(),
            }
        };
        Some(tok)
    }
}

/// Walk `next` links starting at (and including) `start`.
pub fn forward(start: Option<Tok<'_>>) -> Walk<'_, 'static> {
    Walk {
        cursor: start,
        end: None,
        skip: &[],
        direction: Direction::Forward,
    }
}

/// Walk `previous` links starting at (and including) `start`.
pub fn backward(start: Option<Tok<'_>>) -> Walk<'_, 'static> {
    Walk {
        cursor: start,
        end: None,
        skip: &[],
        direction: Direction::Backward,
    }
}

/// The token `n` steps forward (or `-n` steps backward) from `start`, without
/// skipping. `None` when the list runs out first.
pub fn tok_at(start: Option<Tok<'_>>, n: isize) -> Option<Tok<'_>> {
    if n < 0 {
        backward(start).nth(n.unsigned_abs())
    } else {
        forward(start).nth(n as usize)
    }
}

/// Iterator over AST parents, see [`ast_ancestors`].
#[derive(Debug, Clone)]
pub struct AstAncestors<'a> {
    cursor: Option<Tok<'a>>,
}

impl<'a> Iterator for AstAncestors<'a> {
    type Item = Tok<'a>;

    fn next(&mut self) -> Option<Tok<'a>> {
        let parent = self.cursor?.ast_parent();
        self.cursor = parent;
        parent
    }
}

/// Ascend `astParent` links, excluding `start` itself.
pub fn ast_ancestors(start: Option<Tok<'_>>) -> AstAncestors<'_> {
    AstAncestors { cursor: start }
}

/// Top of the expression tree containing `start`; `None` if `start` has no parent.
pub fn ast_root(start: Option<Tok<'_>>) -> Option<Tok<'_>> {
    ast_ancestors(start).last()
}
