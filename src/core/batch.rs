//! Per-item outcome collection for batch operations.

use serde::Serialize;

/// A single failed item in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchError {
    /// Position of the item in the submitted batch.
    pub index: usize,
    /// Title of the failed item, or `Unknown` when it had none.
    pub title: String,
    /// Human-readable failure reason.
    pub error: String,
}

/// Successes and failures from processing a batch item by item.
///
/// A failing item never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome<T> {
    pub items: Vec<T>,
    pub errors: Vec<BatchError>,
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> BatchOutcome<T> {
    /// True when at least one item succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        !self.items.is_empty()
    }

    pub(crate) fn push_error(&mut self, index: usize, title: Option<&str>, error: impl ToString) {
        self.errors.push(BatchError {
            index,
            title: title.unwrap_or("Unknown").to_string(),
            error: error.to_string(),
        });
    }
}
