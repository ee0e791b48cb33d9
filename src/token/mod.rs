//! Token graph: the tokenized, partially parsed view of one translation unit.
//!
//! Tokens live in a single arena in source order, so `next`/`previous` are
//! index arithmetic and a [`TokenId`] doubles as a sequence position. Delimiter
//! links and the expression-tree overlay are stored as ids into the same arena.
//! Nothing in the pattern engine or the checkers mutates a [`TokenList`] once it
//! is built; all navigation goes through the borrowed [`Tok`] handle.

pub mod builder;
pub mod dump;
pub mod walk;

use std::fmt;

use thiserror::Error;

pub use builder::TokenListBuilder;

/// Stable index of a token inside its [`TokenList`]. Ordering follows source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u32);

impl TokenId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(u32);

impl VariableId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

const ASSIGNMENT_OPS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=",
];
const COMPARISON_OPS: &[&str] = &["==", "!=", "<", ">", "<=", ">="];
const OTHER_OPS: &[&str] = &[
    "+", "-", "*", "/", "%", "&", "|", "^", "~", "<<", ">>", "&&", "||", "!", "++", "--",
];

/// Classification predicates the front end attaches to every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFlags {
    pub name: bool,
    pub op: bool,
    pub assignment_op: bool,
    pub comparison_op: bool,
}

impl TokenFlags {
    /// Classify token text the way the C/C++ front end does: identifiers and
    /// keywords are names; arithmetic, bitwise, logical, comparison, assignment
    /// and increment operators are operators.
    pub fn classify(text: &str) -> Self {
        let name = text
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        let assignment_op = ASSIGNMENT_OPS.contains(&text);
        let comparison_op = COMPARISON_OPS.contains(&text);
        let op = assignment_op || comparison_op || OTHER_OPS.contains(&text);
        Self {
            name,
            op,
            assignment_op,
            comparison_op,
        }
    }

    /// Classification for a token that carries a delimiter link. Linked `<`/`>`
    /// are template brackets, not comparisons.
    pub fn classify_linked(text: &str) -> Self {
        match text {
            "<" | ">" => Self::default(),
            _ => Self::classify(text),
        }
    }
}

/// Raw per-token storage. Use [`Tok`] for navigation.
#[derive(Debug, Clone, Default)]
pub struct TokenData {
    pub text: String,
    pub flags: TokenFlags,
    pub link: Option<TokenId>,
    pub ast_parent: Option<TokenId>,
    pub ast_operand1: Option<TokenId>,
    pub ast_operand2: Option<TokenId>,
    pub variable: Option<VariableId>,
    /// 1-indexed line number
    pub line: usize,
    /// 1-indexed column
    pub column: usize,
}

impl TokenData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let flags = TokenFlags::classify(&text);
        Self {
            text,
            flags,
            ..Self::default()
        }
    }
}

/// A declared variable. The type range covers the declared type tokens, e.g.
/// `const int` in `const int x ;`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variable {
    pub name_token: Option<TokenId>,
    pub type_start: Option<TokenId>,
    pub type_end: Option<TokenId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("token {token} has a `{edge}` edge to missing token {target}")]
    DanglingEdge {
        token: usize,
        edge: &'static str,
        target: usize,
    },
    #[error("variable {variable} has a `{edge}` edge to missing token {target}")]
    DanglingVariableEdge {
        variable: usize,
        edge: &'static str,
        target: usize,
    },
    #[error("token {token} links to {partner}, which does not link back")]
    AsymmetricLink { token: usize, partner: usize },
    #[error("token {open} `{open_text}` cannot be paired with token {close} `{close_text}`")]
    MismatchedLink {
        open: usize,
        open_text: String,
        close: usize,
        close_text: String,
    },
    #[error("unbalanced `{text}` at token {token}")]
    Unbalanced { token: usize, text: String },
    #[error("token {operand} is an AST operand of {parent} but its parent is {actual:?}")]
    AstParentMismatch {
        operand: usize,
        parent: usize,
        actual: Option<usize>,
    },
    #[error("token {token} refers to missing variable {variable}")]
    UnknownVariable { token: usize, variable: usize },
}

/// Returns the closing delimiter paired with `open`, if `open` is an opening delimiter.
pub fn closing_delimiter(open: &str) -> Option<&'static str> {
    match open {
        "(" => Some(")"),
        "[" => Some("]"),
        "{" => Some("}"),
        "<" => Some(">"),
        _ => None,
    }
}

/// The token arena for one analyzed file.
#[derive(Debug, Default)]
pub struct TokenList {
    path: String,
    tokens: Vec<TokenData>,
    variables: Vec<Variable>,
}

impl TokenList {
    /// Assemble a list from tokens in source order, validating every edge.
    pub fn new(
        path: impl Into<String>,
        tokens: Vec<TokenData>,
        variables: Vec<Variable>,
    ) -> Result<Self, GraphError> {
        let list = Self {
            path: path.into(),
            tokens,
            variables,
        };
        list.validate()?;
        Ok(list)
    }

    fn validate(&self) -> Result<(), GraphError> {
        let len = self.tokens.len();
        let check = |token: usize, edge: &'static str, target: Option<TokenId>| {
            match target {
                Some(t) if t.index() >= len => Err(GraphError::DanglingEdge {
                    token,
                    edge,
                    target: t.index(),
                }),
                _ => Ok(()),
            }
        };

        for (i, data) in self.tokens.iter().enumerate() {
            check(i, "link", data.link)?;
            check(i, "astParent", data.ast_parent)?;
            check(i, "astOperand1", data.ast_operand1)?;
            check(i, "astOperand2", data.ast_operand2)?;

            if let Some(partner) = data.link {
                let p = partner.index();
                if self.tokens[p].link != Some(TokenId::new(i)) || p == i {
                    return Err(GraphError::AsymmetricLink {
                        token: i,
                        partner: p,
                    });
                }
                let (open, close) = if i < p { (i, p) } else { (p, i) };
                let open_text = &self.tokens[open].text;
                let close_text = &self.tokens[close].text;
                if closing_delimiter(open_text) != Some(close_text.as_str()) {
                    return Err(GraphError::MismatchedLink {
                        open,
                        open_text: open_text.clone(),
                        close,
                        close_text: close_text.clone(),
                    });
                }
            }

            for operand in [data.ast_operand1, data.ast_operand2].into_iter().flatten() {
                let actual = self.tokens[operand.index()].ast_parent;
                if actual != Some(TokenId::new(i)) {
                    return Err(GraphError::AstParentMismatch {
                        operand: operand.index(),
                        parent: i,
                        actual: actual.map(TokenId::index),
                    });
                }
            }

            if let Some(var) = data.variable {
                if var.index() >= self.variables.len() {
                    return Err(GraphError::UnknownVariable {
                        token: i,
                        variable: var.index(),
                    });
                }
            }
        }

        for (v, var) in self.variables.iter().enumerate() {
            for (edge, target) in [
                ("nameToken", var.name_token),
                ("typeStartToken", var.type_start),
                ("typeEndToken", var.type_end),
            ] {
                if let Some(t) = target.filter(|t| t.index() >= len) {
                    return Err(GraphError::DanglingVariableEdge {
                        variable: v,
                        edge,
                        target: t.index(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<Tok<'_>> {
        self.get(TokenId::new(0))
    }

    pub fn get(&self, id: TokenId) -> Option<Tok<'_>> {
        (id.index() < self.tokens.len()).then_some(Tok { list: self, id })
    }

    /// Token at a raw position, mostly useful in tests.
    pub fn at(&self, index: usize) -> Option<Tok<'_>> {
        self.get(TokenId::new(index))
    }

    /// All tokens in source order.
    pub fn iter(&self) -> impl Iterator<Item = Tok<'_>> {
        (0..self.tokens.len()).map(move |i| Tok {
            list: self,
            id: TokenId::new(i),
        })
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn data(&self, id: TokenId) -> &TokenData {
        &self.tokens[id.index()]
    }
}

/// A borrowed handle to one token. Cheap to copy; equality is identity.
#[derive(Clone, Copy)]
pub struct Tok<'a> {
    list: &'a TokenList,
    id: TokenId,
}

impl<'a> Tok<'a> {
    pub fn id(self) -> TokenId {
        self.id
    }

    pub fn list(self) -> &'a TokenList {
        self.list
    }

    pub fn str(self) -> &'a str {
        &self.list.data(self.id).text
    }

    pub fn next(self) -> Option<Tok<'a>> {
        self.list.get(TokenId::new(self.id.index() + 1))
    }

    pub fn previous(self) -> Option<Tok<'a>> {
        let index = self.id.index().checked_sub(1)?;
        self.list.get(TokenId::new(index))
    }

    pub fn link(self) -> Option<Tok<'a>> {
        self.resolve(self.list.data(self.id).link)
    }

    pub fn ast_parent(self) -> Option<Tok<'a>> {
        self.resolve(self.list.data(self.id).ast_parent)
    }

    pub fn ast_operand1(self) -> Option<Tok<'a>> {
        self.resolve(self.list.data(self.id).ast_operand1)
    }

    pub fn ast_operand2(self) -> Option<Tok<'a>> {
        self.resolve(self.list.data(self.id).ast_operand2)
    }

    pub fn flags(self) -> TokenFlags {
        self.list.data(self.id).flags
    }

    pub fn is_name(self) -> bool {
        self.flags().name
    }

    pub fn is_op(self) -> bool {
        self.flags().op
    }

    pub fn is_assignment_op(self) -> bool {
        self.flags().assignment_op
    }

    pub fn is_comparison_op(self) -> bool {
        self.flags().comparison_op
    }

    pub fn variable_id(self) -> Option<VariableId> {
        self.list.data(self.id).variable
    }

    pub fn variable(self) -> Option<&'a Variable> {
        self.variable_id()
            .and_then(|v| self.list.variables.get(v.index()))
    }

    pub fn line(self) -> usize {
        self.list.data(self.id).line
    }

    pub fn column(self) -> usize {
        self.list.data(self.id).column
    }

    /// Token `n` steps away; negative `n` walks backwards.
    pub fn at(self, n: isize) -> Option<Tok<'a>> {
        walk::tok_at(Some(self), n)
    }

    pub fn ast_root(self) -> Option<Tok<'a>> {
        walk::ast_root(Some(self))
    }

    /// Match a pattern starting at this token. See [`crate::pattern`].
    pub fn matches(self, pattern: &str) -> crate::pattern::MatchResult<'a> {
        crate::pattern::match_pattern(Some(self), pattern)
    }

    fn resolve(self, id: Option<TokenId>) -> Option<Tok<'a>> {
        id.and_then(|id| self.list.get(id))
    }
}

impl PartialEq for Tok<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.id == other.id
    }
}

impl Eq for Tok<'_> {}

impl fmt::Debug for Tok<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tok({}, {:?})", self.id.index(), self.str())
    }
}

impl fmt::Display for Tok<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.str())
    }
}
