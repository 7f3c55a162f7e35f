mod api;
mod cli;
mod config;
mod error;
mod storage;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // No subcommand starts the server with defaults
    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        db: None,
        in_memory: false,
    });

    match command {
        Commands::Serve {
            port,
            db,
            in_memory,
        } => {
            tokio::runtime::Runtime::new()
                .expect("Failed to create tokio runtime")
                .block_on(async {
                    cli::serve::execute(port, db, in_memory).await;
                });
        }
    }
}
