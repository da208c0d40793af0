use indexmap::IndexMap;

use crate::config::DEFAULT_MAX_DECLARATIONS;

/// Type recorded for `var x = ...` / `val x = ...` with no annotation.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub declared_type: String,
    pub line: u32,
}

/// Outcome of [`DeclarationTable::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    Inserted,
    /// The name was already declared; the first declaration is kept.
    Duplicate,
    Full,
}

/// Name to first-seen declaration, in insertion order.
#[derive(Debug, Clone)]
pub struct DeclarationTable {
    entries: IndexMap<String, Declaration>,
    capacity: usize,
}

impl Default for DeclarationTable {
    fn default() -> Self {
        DeclarationTable::with_capacity(DEFAULT_MAX_DECLARATIONS)
    }
}

impl DeclarationTable {
    pub fn with_capacity(capacity: usize) -> Self {
        DeclarationTable {
            entries: IndexMap::new(),
            capacity,
        }
    }

    /// Records `name` unless it is already present or the table is full.
    pub fn record(&mut self, name: &str, declared_type: &str, line: u32) -> Recorded {
        if self.entries.contains_key(name) {
            return Recorded::Duplicate;
        }
        if self.is_full() {
            return Recorded::Full;
        }

        self.entries.insert(
            name.to_string(),
            Declaration {
                name: name.to_string(),
                declared_type: declared_type.to_string(),
                line,
            },
        );
        Recorded::Inserted
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|d| d.declared_type.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.entries.get(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
}
