//! Programmatic construction of a [`TokenList`].
//!
//! The C/C++ front end is external; this builder is how callers (and tests)
//! hand an already-tokenized stream to the engine. Round, square and curly
//! brackets are paired automatically by nesting. Template angle brackets,
//! expression-tree edges and variables are supplied explicitly by position.

use super::{
    GraphError, TokenData, TokenFlags, TokenId, TokenList, Variable, VariableId, closing_delimiter,
};

#[derive(Debug, Default)]
pub struct TokenListBuilder {
    path: String,
    tokens: Vec<TokenData>,
    variables: Vec<Variable>,
}

impl TokenListBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Split `text` on whitespace, one token per word. Line and column are
    /// taken from the word's position in `text`.
    pub fn from_words(text: &str) -> Self {
        let mut builder = Self::new("input.cpp");
        for (line_idx, line) in text.lines().enumerate() {
            let mut offset = 0;
            for word in line.split_whitespace() {
                let start = offset + line[offset..].find(word).unwrap_or(0);
                offset = start + word.len();
                builder.push(word, line_idx + 1, start + 1);
            }
        }
        builder
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Append one token, returning its position.
    pub fn push(&mut self, text: &str, line: usize, column: usize) -> usize {
        let mut data = TokenData::new(text);
        data.line = line;
        data.column = column;
        self.tokens.push(data);
        self.tokens.len() - 1
    }

    /// Pair two delimiters explicitly, e.g. template `<` `>`.
    pub fn link(mut self, open: usize, close: usize) -> Self {
        if let (Some(_), Some(_)) = (self.tokens.get(open), self.tokens.get(close)) {
            for (from, to) in [(open, close), (close, open)] {
                let data = &mut self.tokens[from];
                data.link = Some(TokenId::new(to));
                data.flags = TokenFlags::classify_linked(&data.text);
            }
        }
        self
    }

    /// `op` is a unary operator (or keyword such as `return`) over `operand`.
    pub fn unary(mut self, op: usize, operand: usize) -> Self {
        self.set_operand(op, operand, true);
        self
    }

    /// `op` is a binary operator over `lhs` and `rhs`.
    pub fn binary(mut self, op: usize, lhs: usize, rhs: usize) -> Self {
        self.set_operand(op, lhs, true);
        self.set_operand(op, rhs, false);
        self
    }

    fn set_operand(&mut self, op: usize, operand: usize, first: bool) {
        if op >= self.tokens.len() || operand >= self.tokens.len() {
            return;
        }
        let parent = &mut self.tokens[op];
        if first {
            parent.ast_operand1 = Some(TokenId::new(operand));
        } else {
            parent.ast_operand2 = Some(TokenId::new(operand));
        }
        self.tokens[operand].ast_parent = Some(TokenId::new(op));
    }

    /// Declare a variable whose name token is at `name`, optionally with the
    /// declared type spanning `type_range` (inclusive). Every token spelled like
    /// the name token is bound to the new variable.
    pub fn variable(mut self, name: usize, type_range: Option<(usize, usize)>) -> Self {
        let Some(text) = self.tokens.get(name).map(|t| t.text.clone()) else {
            return self;
        };
        let id = VariableId::new(self.variables.len());
        self.variables.push(Variable {
            name_token: Some(TokenId::new(name)),
            type_start: type_range.map(|(start, _)| TokenId::new(start)),
            type_end: type_range.map(|(_, end)| TokenId::new(end)),
        });
        for data in self.tokens.iter_mut().filter(|t| t.text == text) {
            data.variable = Some(id);
        }
        self
    }

    /// Pair unlinked brackets by nesting, then validate the graph.
    pub fn build(mut self) -> Result<TokenList, GraphError> {
        let mut stack: Vec<usize> = Vec::new();
        for i in 0..self.tokens.len() {
            if self.tokens[i].link.is_some() {
                continue;
            }
            match self.tokens[i].text.as_str() {
                "(" | "[" | "{" => stack.push(i),
                ")" | "]" | "}" => {
                    let Some(open) = stack.pop() else {
                        return Err(GraphError::Unbalanced {
                            token: i,
                            text: self.tokens[i].text.clone(),
                        });
                    };
                    let open_text = &self.tokens[open].text;
                    if closing_delimiter(open_text) != Some(self.tokens[i].text.as_str()) {
                        return Err(GraphError::MismatchedLink {
                            open,
                            open_text: open_text.clone(),
                            close: i,
                            close_text: self.tokens[i].text.clone(),
                        });
                    }
                    self.tokens[open].link = Some(TokenId::new(i));
                    self.tokens[i].link = Some(TokenId::new(open));
                }
                _ => {}
            }
        }
        if let Some(open) = stack.pop() {
            return Err(GraphError::Unbalanced {
                token: open,
                text: self.tokens[open].text.clone(),
            });
        }
        TokenList::new(self.path, self.tokens, self.variables)
    }
}
