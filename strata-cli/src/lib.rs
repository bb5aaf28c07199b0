//! strata CLI - command-line front end for strata migrations.
//!
//! Migrations are ordinary Rust functions compiled into the host binary,
//! so this crate is a library rather than a standalone executable: the
//! host builds a [`MigrationRegistry`] and hands it to [`run`].
//!
//! ```no_run
//! use strata_cli::{output, run};
//! use strata_migrate::MigrationRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = MigrationRegistry::new();
//!     // registry.register(...) for each migration module
//!     if let Err(e) = run(registry).await {
//!         output::error(&e.to_string());
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod scaffold;

use clap::Parser;
use strata_migrate::MigrationRegistry;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::CliResult;

/// Parse command-line arguments and run the requested command against
/// the given registry.
pub async fn run(registry: MigrationRegistry) -> CliResult<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Create(args) => commands::create::run(&config, args).await,
        Command::Migrate => commands::migrate::run(&config, registry).await,
        Command::Rollback(args) => commands::rollback::run(&config, registry, args).await,
        Command::Status => commands::status::run(&config, registry).await,
    }
}
