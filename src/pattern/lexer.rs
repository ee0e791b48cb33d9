//! Pattern lexer.
//!
//! Splits a pattern string like `if (*)@cond { %var%@x = *; }` into words.
//! Words are separated by single spaces; each word may carry a binding name
//! after an `@`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'p> {
    /// Matcher expression, e.g. `%var%`, `if|while`, `!;`
    pub expr: &'p str,
    /// Binding name after `@`, if any. `Some("")` for a trailing bare `@`.
    pub binding: Option<&'p str>,
}

pub struct Lexer<'p> {
    input: &'p str,
}

impl<'p> Lexer<'p> {
    pub fn new(input: &'p str) -> Self {
        Self { input }
    }

    /// Every space-separated word, including empty ones produced by doubled
    /// spaces; the compiler rejects those.
    pub fn tokenize(&self) -> Vec<Word<'p>> {
        if self.input.is_empty() {
            return Vec::new();
        }
        self.input
            .split(' ')
            .map(|word| match word.split_once('@') {
                Some((expr, binding)) => Word {
                    expr,
                    binding: Some(binding),
                },
                None => Word {
                    expr: word,
                    binding: None,
                },
            })
            .collect()
    }
}
