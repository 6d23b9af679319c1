//! rollbook library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Class { .. } => cli::commands::class::handle(&cli.command, cfg),
        Commands::Open { .. } | Commands::Close { .. } => {
            cli::commands::session::handle(&cli.command, cfg)
        }
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg),
        Commands::Matrix { .. } => cli::commands::matrix::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Push { .. } => cli::commands::push::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; a broken file is a startup failure, nothing later
    // is allowed to kill the process.
    let mut cfg = Config::load()?;

    // Command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_archive) = &cli.archive {
        cfg.archive_dir = custom_archive.clone();
    }

    dispatch(&cli, &cfg)
}
