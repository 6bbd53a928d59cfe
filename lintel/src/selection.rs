//! Selection state for the table component.
//!
//! Selection is keyed by record id strings so it stays stable when rows
//! are replaced, and it remembers *insertion order*: the selection-change
//! callback reports records in the order the user picked them.

use std::collections::HashSet;

/// Insertion-ordered, id-keyed selection set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selected ids in the order they were added
    order: Vec<String>,
    /// Membership index for O(1) lookups
    members: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// All selected ids, in insertion order.
    pub fn selected(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Toggle an id: newly selected ids append at the end, deselected
    /// ids drop out without disturbing the order of the rest.
    ///
    /// Returns `true` if the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.members.remove(id) {
            self.order.retain(|existing| existing != id);
            false
        } else {
            self.members.insert(id.to_string());
            self.order.push(id.to_string());
            true
        }
    }

    /// Select an id if not already selected.
    pub fn select(&mut self, id: &str) {
        if self.members.insert(id.to_string()) {
            self.order.push(id.to_string());
        }
    }

    /// Deselect an id if selected.
    pub fn deselect(&mut self, id: &str) {
        if self.members.remove(id) {
            self.order.retain(|existing| existing != id);
        }
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Replace the selection with exactly the given ids, in the given
    /// order. Duplicates collapse to their first occurrence.
    pub fn select_exactly(&mut self, ids: &[String]) {
        self.clear();
        for id in ids {
            self.select(id);
        }
    }

    /// Drop every selected id not present in `valid`, keeping order.
    pub fn retain_ids(&mut self, valid: &HashSet<String>) {
        if self.order.iter().all(|id| valid.contains(id)) {
            return;
        }
        self.order.retain(|id| valid.contains(id));
        self.members.retain(|id| valid.contains(id));
    }
}
