// src/bimap.rs

use std::collections::HashMap;

/// Two ordinary maps kept in sync.
///
/// `insert(left, right)` registers `left -> right` and, unless `right` already
/// has one, the reverse `right -> left`. Many lefts may point to the same
/// right; the reverse direction keeps the first one registered.
#[derive(Debug, Clone, Default)]
pub struct BiMap {
    forward: HashMap<String, String>,
    backward: HashMap<String, String>,
}

impl BiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, left: impl Into<String>, right: impl Into<String>) {
        let left = left.into();
        let right = right.into();
        self.backward
            .entry(right.clone())
            .or_insert_with(|| left.clone());
        self.forward.insert(left, right);
    }

    /// Register `left -> right` without touching the reverse direction.
    pub fn alias(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.forward.insert(left.into(), right.into());
    }

    pub fn right(&self, left: &str) -> Option<&str> {
        self.forward.get(left).map(String::as_str)
    }

    pub fn left(&self, right: &str) -> Option<&str> {
        self.backward.get(right).map(String::as_str)
    }

    /// Look a key up in either direction, forward first.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.right(key).or_else(|| self.left(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of forward entries.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
