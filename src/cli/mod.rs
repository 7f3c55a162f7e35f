//! CLI module

pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(version)]
#[command(about = "Minimal task-list web service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (overrides TASKDECK_PORT, default 5000)
        #[arg(short, long)]
        port: Option<u16>,
        /// SQLite database path (overrides TASKDECK_DB, default ~/.taskdeck/tasks.db)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Keep tasks in process memory instead of SQLite (lost on exit)
        #[arg(long)]
        in_memory: bool,
    },
}
