//! Docpress CLI — page metadata enrichment for published documentation.
//!
//! Fetches commit-history and navigation facets for one rendered page and
//! prints the merged metadata as JSON.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
