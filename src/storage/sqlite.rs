//! SQLite-backed task store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use super::{Task, TaskStore};
use crate::error::{AppError, Result};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    task      TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
);";

const SELECT_TASK: &str = "SELECT id, task, completed FROM tasks WHERE id = ?1";

/// Durable task store backed by a SQLite database file.
///
/// The connection is guarded by a mutex held for the span of one store call.
/// Mutating calls run inside an explicit transaction: committed on success,
/// rolled back when the transaction guard drops on an early return.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the database at `path`, creating the file and its parent
    /// directory on first use.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    /// Open a throwaway in-memory database
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::storage("sqlite connection mutex poisoned"))
    }
}

fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        completed: row.get(2)?,
    })
}

impl TaskStore for SqliteStore {
    fn create(&self, description: &str) -> Result<Task> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO tasks (task, completed) VALUES (?1, 0)",
            params![description],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Task {
            id,
            description: description.to_string(),
            completed: false,
        })
    }

    fn list(&self) -> Result<Vec<Task>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, task, completed FROM tasks ORDER BY id")?;
        let rows = stmt.query_map([], row_to_task)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.lock()?;
        let task = conn
            .query_row(SELECT_TASK, params![id], row_to_task)
            .optional()?;
        Ok(task)
    }

    fn set_completed(&self, id: i64, completed: bool) -> Result<Option<Task>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let changed = tx.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        if changed == 0 {
            // Nothing to commit, the guard rolls back on drop
            return Ok(None);
        }
        let task = tx.query_row(SELECT_TASK, params![id], row_to_task)?;
        tx.commit()?;
        Ok(Some(task))
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_fresh_ids() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store.create("Buy milk").unwrap();
        let second = store.create("Water plants").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.description, "Buy milk");
        assert!(!first.completed);
    }

    #[test]
    fn test_list_returns_creation_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();

        let tasks = store.list().unwrap();
        let names: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_list_empty_store() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get(42).unwrap().is_none());
    }

    #[test]
    fn test_set_completed_preserves_description() {
        let store = SqliteStore::open_in_memory().unwrap();
        let task = store.create("Write report").unwrap();

        let updated = store.set_completed(task.id, true).unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.description, "Write report");

        // Flipping back is always legal
        let reverted = store.set_completed(task.id, false).unwrap().unwrap();
        assert!(!reverted.completed);
    }

    #[test]
    fn test_set_completed_missing_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.set_completed(7, true).unwrap().is_none());
    }

    #[test]
    fn test_delete_reports_missing() {
        let store = SqliteStore::open_in_memory().unwrap();
        let task = store.create("temp").unwrap();

        assert!(store.delete(task.id).unwrap());
        assert!(!store.delete(task.id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_file_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.create("survives reopen").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "survives reopen");
    }
}
