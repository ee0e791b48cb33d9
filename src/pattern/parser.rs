//! Pattern compiler.
//!
//! Turns the words produced by the lexer into [`Atom`]s. Each matcher
//! expression is compiled once into an [`AtomExpr`] tree so evaluation never
//! re-parses or looks up strings.

use super::error::PatternError;
use super::lexer::Word;

/// Connectors that only match a token spelled exactly like them. Other operator
/// spellings keep their modifier reading: `!=` is "not `=`", `*=` searches for
/// `=`, and `|=` is an alternation with an empty branch.
const LITERAL_ONLY: &[&str] = &["!", "|", "||", "%"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardClass {
    /// `%any%`
    Any,
    /// `%assign%`
    Assign,
    /// `%comp%`
    Comp,
    /// `%name%`
    Name,
    /// `%op%`
    Op,
    /// `%or%`, a literal `|`
    Or,
    /// `%oror%`, a literal `||`
    OrOr,
    /// `%var%`
    Var,
}

impl WildcardClass {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "%any%" => Self::Any,
            "%assign%" => Self::Assign,
            "%comp%" => Self::Comp,
            "%name%" => Self::Name,
            "%op%" => Self::Op,
            "%or%" => Self::Or,
            "%oror%" => Self::OrOr,
            "%var%" => Self::Var,
            _ => return None,
        })
    }
}

/// Bracket-skip atoms: match an opening delimiter and consume through its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(*)`
    Paren,
    /// `[*]`
    Square,
    /// `{*}`
    Brace,
    /// `<*>`
    Angle,
}

impl Bracket {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "(*)" => Self::Paren,
            "[*]" => Self::Square,
            "{*}" => Self::Brace,
            "<*>" => Self::Angle,
            _ => return None,
        })
    }

    pub fn open(self) -> &'static str {
        match self {
            Self::Paren => "(",
            Self::Square => "[",
            Self::Brace => "{",
            Self::Angle => "<",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomKind {
    /// Matches only by text equality.
    Literal,
    Class(WildcardClass),
    Bracket(Bracket),
    /// `a|b|c`, first matching alternative wins
    Alternation(Vec<AtomExpr>),
    /// `!expr`
    Negation(Box<AtomExpr>),
    /// `*expr`, scan forward until `expr` matches
    Search(Box<AtomExpr>),
}

/// A compiled matcher expression. `text` is the expression as written; a token
/// spelled exactly like it always matches, whatever the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomExpr {
    pub text: Box<str>,
    pub kind: AtomKind,
}

/// One word of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub expr: AtomExpr,
    /// Index into the pattern's binding table.
    pub slot: Option<usize>,
}

pub struct Parser<'p> {
    source: &'p str,
    words: Vec<Word<'p>>,
}

impl<'p> Parser<'p> {
    pub fn new(source: &'p str, words: Vec<Word<'p>>) -> Self {
        Self { source, words }
    }

    /// Compile every word, collecting binding names in declaration order.
    pub fn parse(&self) -> Result<(Vec<Atom>, Vec<Box<str>>), PatternError> {
        if self.words.is_empty() {
            return Err(PatternError::Empty);
        }
        let mut atoms = Vec::with_capacity(self.words.len());
        let mut names: Vec<Box<str>> = Vec::new();

        for (index, word) in self.words.iter().enumerate() {
            if word.expr.is_empty() {
                return Err(PatternError::EmptyAtom {
                    pattern: self.source.to_string(),
                    index,
                });
            }
            let expr = self.parse_expr(word.expr)?;
            let slot = match word.binding {
                None => None,
                Some(name) => {
                    if !is_binding_name(name) {
                        return Err(PatternError::InvalidBinding {
                            pattern: self.source.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if names.iter().any(|n| &**n == name) {
                        return Err(PatternError::DuplicateBinding {
                            pattern: self.source.to_string(),
                            name: name.to_string(),
                        });
                    }
                    names.push(name.into());
                    Some(names.len() - 1)
                }
            };
            atoms.push(Atom { expr, slot });
        }
        Ok((atoms, names))
    }

    fn parse_expr(&self, text: &str) -> Result<AtomExpr, PatternError> {
        let kind = if LITERAL_ONLY.contains(&text) {
            AtomKind::Literal
        } else if let Some(class) = WildcardClass::from_text(text) {
            AtomKind::Class(class)
        } else if let Some(bracket) = Bracket::from_text(text) {
            AtomKind::Bracket(bracket)
        } else if text.contains('|') {
            // Empty branches compile to an empty literal, which never matches.
            let alternatives = text
                .split('|')
                .map(|alt| self.parse_expr(alt))
                .collect::<Result<Vec<_>, _>>()?;
            AtomKind::Alternation(alternatives)
        } else if let Some(inner) = text.strip_prefix('!') {
            AtomKind::Negation(Box::new(self.parse_expr(inner)?))
        } else if let Some(inner) = text.strip_prefix('*') {
            AtomKind::Search(Box::new(self.parse_expr(inner)?))
        } else {
            AtomKind::Literal
        };
        Ok(AtomExpr {
            text: text.into(),
            kind,
        })
    }
}

fn is_binding_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
