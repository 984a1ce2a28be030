use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "bell")]
#[command(about = "Exchange open/close countdowns", long_about = None)]
struct Cli {
    /// Catalog YAML paths in merge order (base -> overlays). Defaults to the
    /// bundled catalog.
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the countdown to the next open or close of one exchange
    Countdown {
        /// Exchange acronym (exact match, e.g. NYSE)
        acronym: String,

        /// Evaluate at this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<String>,

        /// Print the full result as JSON instead of a sentence
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Re-print the countdown on a fixed interval until Ctrl-C
    Watch {
        /// Exchange acronym (exact match, e.g. NYSE)
        acronym: String,

        /// Refresh interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,

        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// List the exchanges in the catalog
    Exchanges,

    /// Print the layered catalog hash + canonical JSON
    CatalogHash,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();
    let catalog = commands::load_catalog(&cli.config_paths)?;

    match cli.cmd {
        Commands::Countdown { acronym, now, json } => {
            commands::countdown::run_countdown(&catalog, &acronym, now.as_deref(), json)?;
        }
        Commands::Watch {
            acronym,
            interval_ms,
            ticks,
        } => {
            commands::countdown::run_watch(&catalog, &acronym, interval_ms, ticks).await?;
        }
        Commands::Exchanges => {
            commands::catalog::list_exchanges(&catalog);
        }
        Commands::CatalogHash => {
            commands::catalog::print_catalog_hash(&catalog);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays the command's output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}
