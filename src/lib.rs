//! asistreport library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod charts;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod table;
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
        Commands::Groups => cli::commands::groups::handle(cfg),
        Commands::Students { .. } => cli::commands::students::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Pdf { .. } => cli::commands::pdf::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; the connection string can be overridden
    // per invocation with the global --uri flag.
    let mut cfg = Config::load()?;

    if let Some(uri) = &cli.uri {
        cfg.mongo_uri = uri.clone();
    }

    dispatch(&cli, &cfg)
}
