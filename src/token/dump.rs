//! Loader for JSON token dumps produced by the C/C++ front end.
//!
//! The layout mirrors the front end's own dump: tokens in source order with
//! string ids, and edges expressed as ids (`"0"` or a missing key means none).
//!
//! ```json
//! {
//!   "file": "a.cpp",
//!   "tokens": [
//!     { "id": "t1", "str": "x", "linenr": 1, "column": 1, "variable": "v1" }
//!   ],
//!   "variables": [
//!     { "id": "v1", "nameToken": "t1", "typeStartToken": "0", "typeEndToken": "0" }
//!   ]
//! }
//! ```
//!
//! Classification flags (`isName`, `isOp`, `isAssignmentOp`, `isComparisonOp`)
//! are optional; missing ones are derived from the token text.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::{TokenData, TokenFlags, TokenId, TokenList, Variable, VariableId};

#[derive(Debug, Deserialize)]
struct DumpFile {
    #[serde(default)]
    file: Option<String>,
    tokens: Vec<DumpToken>,
    #[serde(default)]
    variables: Vec<DumpVariable>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DumpToken {
    id: String,
    str: String,
    #[serde(default)]
    linenr: usize,
    #[serde(default)]
    column: usize,
    link: Option<String>,
    ast_parent: Option<String>,
    ast_operand1: Option<String>,
    ast_operand2: Option<String>,
    variable: Option<String>,
    is_name: Option<bool>,
    is_op: Option<bool>,
    is_assignment_op: Option<bool>,
    is_comparison_op: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DumpVariable {
    id: String,
    name_token: Option<String>,
    type_start_token: Option<String>,
    type_end_token: Option<String>,
}

/// Read and validate a dump file.
pub fn load_dump(path: &Path) -> Result<TokenList> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dump {}", path.display()))?;
    parse_dump(&path.display().to_string(), &contents)
        .with_context(|| format!("invalid dump {}", path.display()))
}

/// Parse dump JSON. `fallback_path` names the list when the dump has no `file`.
pub fn parse_dump(fallback_path: &str, json: &str) -> Result<TokenList> {
    let dump: DumpFile = serde_json::from_str(json).context("failed to parse token dump")?;

    let mut token_ids: HashMap<&str, TokenId> = HashMap::new();
    for (i, tok) in dump.tokens.iter().enumerate() {
        if token_ids.insert(tok.id.as_str(), TokenId::new(i)).is_some() {
            bail!("duplicate token id `{}`", tok.id);
        }
    }
    let mut variable_ids: HashMap<&str, VariableId> = HashMap::new();
    for (i, var) in dump.variables.iter().enumerate() {
        if variable_ids.insert(var.id.as_str(), VariableId::new(i)).is_some() {
            bail!("duplicate variable id `{}`", var.id);
        }
    }

    let token_ref = |owner: &str, id: Option<&String>| -> Result<Option<TokenId>> {
        match id.map(String::as_str) {
            None | Some("0") | Some("") => Ok(None),
            Some(id) => token_ids
                .get(id)
                .copied()
                .map(Some)
                .with_context(|| format!("`{owner}` refers to unknown token `{id}`")),
        }
    };

    let mut tokens = Vec::with_capacity(dump.tokens.len());
    for tok in &dump.tokens {
        let link = token_ref(tok.id.as_str(), tok.link.as_ref())?;
        let derived = if link.is_some() {
            TokenFlags::classify_linked(&tok.str)
        } else {
            TokenFlags::classify(&tok.str)
        };
        let variable = match tok.variable.as_deref() {
            None | Some("0") | Some("") => None,
            Some(id) => Some(variable_ids.get(id).copied().with_context(|| {
                format!("`{}` refers to unknown variable `{id}`", tok.id)
            })?),
        };
        tokens.push(TokenData {
            text: tok.str.clone(),
            flags: TokenFlags {
                name: tok.is_name.unwrap_or(derived.name),
                op: tok.is_op.unwrap_or(derived.op),
                assignment_op: tok.is_assignment_op.unwrap_or(derived.assignment_op),
                comparison_op: tok.is_comparison_op.unwrap_or(derived.comparison_op),
            },
            link,
            ast_parent: token_ref(tok.id.as_str(), tok.ast_parent.as_ref())?,
            ast_operand1: token_ref(tok.id.as_str(), tok.ast_operand1.as_ref())?,
            ast_operand2: token_ref(tok.id.as_str(), tok.ast_operand2.as_ref())?,
            variable,
            line: tok.linenr,
            column: tok.column,
        });
    }

    let mut variables = Vec::with_capacity(dump.variables.len());
    for var in &dump.variables {
        variables.push(Variable {
            name_token: token_ref(var.id.as_str(), var.name_token.as_ref())?,
            type_start: token_ref(var.id.as_str(), var.type_start_token.as_ref())?,
            type_end: token_ref(var.id.as_str(), var.type_end_token.as_ref())?,
        });
    }

    let path = dump.file.unwrap_or_else(|| fallback_path.to_string());
    let list = TokenList::new(path, tokens, variables)?;
    tracing::debug!(path = list.path(), tokens = list.len(), "loaded token dump");
    Ok(list)
}
