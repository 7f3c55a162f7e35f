//! In-memory task store.
//!
//! Non-durable: tasks live in process memory and vanish on exit. Used by the
//! test suite and by `taskdeck serve --in-memory`. Behaves exactly like the
//! SQLite store, including 404 semantics for deleting a missing id.

use std::sync::Mutex;

use super::{Task, TaskStore};
use crate::error::{AppError, Result};

/// Task store holding everything in a mutex-guarded vector
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    tasks: Vec<Task>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::storage("memory store mutex poisoned"))
    }
}

impl TaskStore for MemoryStore {
    fn create(&self, description: &str) -> Result<Task> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let task = Task {
            id: inner.last_id,
            description: description.to_string(),
            completed: false,
        };
        inner.tasks.push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        // Insertion order, ids are assigned monotonically
        Ok(self.lock()?.tasks.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        let inner = self.lock()?;
        Ok(inner.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Task>> {
        let mut inner = self.lock()?;
        let task = match inner.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task,
            None => return Ok(None),
        };
        task.completed = completed;
        Ok(Some(task.clone()))
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.lock()?;
        match inner.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                inner.tasks.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_survive_deletion() {
        let store = MemoryStore::new();
        let first = store.create("one").unwrap();
        store.delete(first.id).unwrap();

        // Ids are never reused
        let second = store.create("two").unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_delete_missing_is_false() {
        let store = MemoryStore::new();
        assert!(!store.delete(99).unwrap());
    }

    #[test]
    fn test_set_completed_roundtrip() {
        let store = MemoryStore::new();
        let task = store.create("flip me").unwrap();

        let updated = store.set_completed(task.id, true).unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.description, "flip me");

        assert_eq!(store.get(task.id).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let store = MemoryStore::new();
        store.create("a").unwrap();
        store.create("b").unwrap();

        let tasks = store.list().unwrap();
        assert_eq!(tasks[0].description, "a");
        assert_eq!(tasks[1].description, "b");
    }
}
