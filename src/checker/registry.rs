use std::collections::HashMap;

use super::Checker;

pub struct CheckerRegistry {
    checkers: Vec<Box<dyn Checker>>,
    index: HashMap<&'static str, usize>,
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckerRegistry {
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build the default registry with all built-in checkers.
    pub fn default_registry() -> Self {
        let mut registry = Self::new();
        super::control_flow::register_all(&mut registry);
        super::empty_block::register_all(&mut registry);
        super::expression::register_all(&mut registry);
        registry
    }

    /// Register a checker. A checker with the same name replaces the earlier one.
    pub fn register(&mut self, checker: Box<dyn Checker>) {
        let name = checker.name();
        if let Some(&idx) = self.index.get(name) {
            self.checkers[idx] = checker;
            return;
        }
        self.index.insert(name, self.checkers.len());
        self.checkers.push(checker);
    }

    pub fn checkers(&self) -> &[Box<dyn Checker>] {
        &self.checkers
    }

    pub fn get(&self, name: &str) -> Option<&dyn Checker> {
        self.index.get(name).map(|&idx| &*self.checkers[idx])
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}
