//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// strata - schema migrations for Rust
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "strata - schema migrations for Rust", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "strata.toml")]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new migration scaffold with the given name
    Create(CreateArgs),

    /// Run pending migrations
    Migrate,

    /// Roll back by a number of migrations
    Rollback(RollbackArgs),

    /// Show which migrations are applied and which are pending
    Status,
}

/// Arguments for the `create` command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Migration name, e.g. `create_users`
    pub name: String,
}

/// Arguments for the `rollback` command
#[derive(Args, Debug)]
pub struct RollbackArgs {
    /// Number of migrations to roll back
    #[arg(default_value_t = 1)]
    pub steps: usize,
}
