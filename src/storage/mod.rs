//! Task persistence layer.
//!
//! HTTP handlers never touch a database directly; they go through the
//! [`TaskStore`] trait, so the durable SQLite store and the in-memory store
//! are interchangeable.

pub mod memory;
pub mod sqlite;

use serde::Serialize;

use crate::error::Result;

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Store-assigned identifier, unique and immutable
    pub id: i64,
    /// Task text (wire name: `task`), set at creation and never changed
    #[serde(rename = "task")]
    pub description: String,
    /// Completion flag, false at creation
    pub completed: bool,
}

/// Storage interface for tasks.
///
/// Post-conditions every implementation upholds:
/// - `create` assigns a fresh id and stores `completed = false`
/// - `list` returns tasks in creation (id) order
/// - `set_completed` and `delete` report a missing id instead of erroring
pub trait TaskStore: Send + Sync {
    /// Insert a new task and return the stored row
    fn create(&self, description: &str) -> Result<Task>;

    /// All tasks, ordered by id ascending
    fn list(&self) -> Result<Vec<Task>>;

    /// Look up one task; `None` if the id does not exist
    fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Update the completion flag; `None` if the id does not exist.
    /// The task text is left untouched.
    fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Task>>;

    /// Remove a task permanently; `false` if the id does not exist
    fn delete(&self, id: i64) -> Result<bool>;
}
