//! kvscope - a TUI for browsing key-value stores exposed over HTTP.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod query;
pub mod runtime;
pub mod ui;
pub mod viewer;

use clap::Parser;
use cli::Cli;
use color_eyre::eyre::Result;

/// Main entry point - parses CLI args and runs the application.
///
/// Sets up the tokio runtime and hands control to the live event loop.
pub fn run_cli() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(runtime::run(cli))
}
