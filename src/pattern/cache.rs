//! Process-wide cache of compiled patterns keyed by source string.
//!
//! Checkers pass pattern strings inline at every call site, so each distinct
//! string is compiled once and shared across threads. Compile errors are
//! cached too: a malformed pattern is reported once, not once per token.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::Pattern;
use super::error::PatternError;

type Entry = Result<Arc<Pattern>, PatternError>;

#[derive(Default)]
pub struct PatternCache {
    entries: RwLock<HashMap<Box<str>, Entry>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, source: &str) -> Entry {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = entries.get(source) {
                return entry.clone();
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(source.into())
            .or_insert_with(|| {
                let compiled = Pattern::compile(source).map(Arc::new);
                if let Err(e) = &compiled {
                    tracing::error!("malformed token pattern: {e}");
                }
                compiled
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// The cache behind [`match_pattern`](super::match_pattern).
pub fn global() -> &'static PatternCache {
    &GLOBAL
}
