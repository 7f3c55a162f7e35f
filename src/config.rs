//! Environment-driven configuration.
//!
//! Resolution order for each setting: CLI flag, then environment variable,
//! then built-in default. The log level is handled separately through
//! `RUST_LOG` when the tracing subscriber is installed.

use std::path::PathBuf;

/// Default port for the web server
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on (`TASKDECK_PORT`)
    pub port: u16,
    /// SQLite database location (`TASKDECK_DB`)
    pub db_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let port = std::env::var("TASKDECK_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_path = std::env::var("TASKDECK_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_db_path());

        Self { port, db_path }
    }
}

/// Default database location: ~/.taskdeck/tasks.db
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskdeck")
        .join("tasks.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(path.ends_with(".taskdeck/tasks.db"));
    }
}
