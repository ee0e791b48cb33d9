use thiserror::Error;

/// A malformed pattern string. These are programmer errors in a checker and are
/// reported when the pattern is compiled, never per token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern `{pattern}` has an empty word at position {index}")]
    EmptyAtom { pattern: String, index: usize },
    #[error("pattern `{pattern}` has an invalid binding name `{name}`")]
    InvalidBinding { pattern: String, name: String },
    #[error("pattern `{pattern}` binds `{name}` more than once")]
    DuplicateBinding { pattern: String, name: String },
    #[error("pattern `{pattern}` declares no binding named `{name}`")]
    UnknownBinding { pattern: String, name: String },
}
