//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;

use docpress_core::{build_client, enrich_page};
use docpress_markdown::ComrakRenderer;
use docpress_shared::{
    AppConfig, FetchConfig, PageSource, config_file_path, init_config, load_config,
    load_config_from,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Docpress — enrich rendered documentation pages with repository metadata.
#[derive(Parser)]
#[command(
    name = "docpress",
    version,
    about = "Enrich rendered documentation pages with contributors, last-modified, and navigation.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path (defaults to ~/.docpress/docpress.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Enrich one page and print its metadata facets as JSON.
    Enrich {
        /// Repository owner (user or organization).
        #[arg(long)]
        owner: String,

        /// Repository name.
        #[arg(long)]
        repo: String,

        /// Branch, tag, or commit identifier.
        #[arg(long = "ref", default_value = "main", value_name = "REF")]
        git_ref: String,

        /// Path of the page's markdown source within the repository.
        #[arg(long)]
        path: String,

        /// Override the hosting API root URL.
        #[arg(long)]
        api_root: Option<String>,

        /// Override the raw content host root URL.
        #[arg(long)]
        raw_root: Option<String>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout stays
/// clean JSON for downstream tooling.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command routing
// ---------------------------------------------------------------------------

/// Load config and dispatch the selected subcommand.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config: AppConfig = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    match cli.command {
        Command::Enrich {
            owner,
            repo,
            git_ref,
            path,
            api_root,
            raw_root,
            pretty,
        } => {
            let mut fetch = FetchConfig::from(&config);
            if let Some(root) = api_root {
                fetch.api_root = root;
            }
            if let Some(root) = raw_root {
                fetch.raw_root = root;
            }

            let page = PageSource {
                owner,
                repo,
                git_ref,
                path,
            };

            let client = build_client(&fetch)?;
            let facets = enrich_page(&client, &ComrakRenderer, &page, &fetch).await?;

            info!(
                committers = facets.committers.len(),
                nav_fragments = facets.nav.len(),
                "page enriched"
            );

            let json = if pretty {
                serde_json::to_string_pretty(&facets)?
            } else {
                serde_json::to_string(&facets)?
            };
            println!("{json}");

            Ok(())
        }

        Command::Config { action } => match action {
            ConfigAction::Init => {
                let path = init_config()?;
                println!("created {}", path.display());
                Ok(())
            }
            ConfigAction::Show => {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => config_file_path()?,
                };
                let toml_str = toml::to_string_pretty(&config)?;
                println!("# {}", path.display());
                print!("{toml_str}");
                Ok(())
            }
        },
    }
}
