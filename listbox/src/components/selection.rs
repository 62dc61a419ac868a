//! Selection model shared by selection-driven components.
//!
//! The model is the authoritative set of currently-selected values plus an
//! arity flag. Every mutation returns the diff it caused so callers can emit
//! change events from it.

use serde::{Deserialize, Serialize};

/// Selection arity for a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one value selected at a time
    #[default]
    Single,
    /// Any number of values selected
    Multiple,
}

/// Value-based selection state.
///
/// Values are kept in insertion order and compared with `PartialEq`; there is
/// no deep or structural equality beyond what the value type provides.
#[derive(Debug, Clone)]
pub struct SelectionModel<T> {
    /// Currently selected values, in the order they were selected
    values: Vec<T>,
    /// Selection arity, fixed at construction
    mode: SelectionMode,
}

impl<T: Clone + PartialEq> SelectionModel<T> {
    /// Create a new empty model with the given arity.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            values: Vec::new(),
            mode,
        }
    }

    /// Get the selection arity.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Check if the model allows more than one selected value.
    pub fn is_multiple(&self) -> bool {
        self.mode == SelectionMode::Multiple
    }

    /// Get all selected values in selection order.
    pub fn selected(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Check if a value is selected.
    pub fn is_selected(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    /// Get the number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Select the given values.
    ///
    /// In single mode each select replaces the previous value; the model
    /// never holds more than one. Returns `(added, removed)` values.
    pub fn select(&mut self, values: &[T]) -> (Vec<T>, Vec<T>) {
        let mut added = Vec::new();
        let mut removed = Vec::new();
        for value in values {
            if self.is_multiple() {
                if !self.values.contains(value) {
                    self.values.push(value.clone());
                    added.push(value.clone());
                }
            } else {
                removed.extend(self.values.iter().filter(|v| *v != value).cloned());
                let was_selected = self.values.contains(value);
                self.values.clear();
                self.values.push(value.clone());
                if !was_selected {
                    added.push(value.clone());
                }
            }
        }
        (added, removed)
    }

    /// Deselect the given values. Returns the values actually removed.
    pub fn deselect(&mut self, values: &[T]) -> Vec<T> {
        let mut removed = Vec::new();
        for value in values {
            if let Some(pos) = self.values.iter().position(|v| v == value) {
                removed.push(self.values.remove(pos));
            }
        }
        removed
    }

    /// Clear all selection. Returns the values that were deselected.
    pub fn clear(&mut self) -> Vec<T> {
        self.values.drain(..).collect()
    }
}
