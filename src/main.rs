//! # cosmos-sampler CLI (`cosq`)
//!
//! The `cosq` binary seeds an Azure Cosmos DB container with synthetic
//! product data and runs the sample queries against it.
//!
//! ## Usage
//!
//! ```bash
//! cosq --config ./config/cosq.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cosq init` | Create the database and container if absent |
//! | `cosq status` | Check endpoint, database, and container reachability |
//! | `cosq seed` | Upsert the synthetic product documents |
//! | `cosq query products` | Fixed filter query (fresh fruit) |
//! | `cosq query categories` | Group-by count over category pairs |
//! | `cosq query sql "<text>"` | Arbitrary SQL query, raw JSON output |
//!
//! Credentials come from `AZURE_COSMOSDB_URL` and `AZURE_COSMOSDB_KEY`.

mod catalog;
mod client;
mod config;
mod init;
mod models;
mod query;
mod seed;
mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cosmos-sampler — seed and query an Azure Cosmos DB demo container.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; a missing file falls back to built-in defaults
/// (`DemoDatabase`/`DemoContainer`, 100 records).
#[derive(Parser)]
#[command(
    name = "cosq",
    about = "Seed an Azure Cosmos DB container with synthetic product data and query it back",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/cosq.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Create the database and container if they do not exist.
    ///
    /// Idempotent — running it against existing resources is safe.
    Init,

    /// Check endpoint, database, and container reachability.
    Status,

    /// Upsert the synthetic product documents.
    ///
    /// Each record is derived deterministically from its index, so
    /// re-seeding overwrites the same documents rather than duplicating
    /// them. Writes are sequential with no batching and no retry.
    Seed {
        /// Number of records to seed (overrides `seed.count` from config).
        #[arg(long)]
        count: Option<usize>,
    },

    /// Run a query against the container and print the rows.
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },
}

/// Query subcommands.
#[derive(Subcommand)]
enum QueryAction {
    /// Fixed filter query: products with category main = Fruit, sub = Fresh.
    Products,

    /// Group-by count: number of products per distinct (main, sub) pair.
    Categories,

    /// Arbitrary SQL query; each result row is printed as pretty JSON.
    Sql {
        /// The SQL query text, e.g. `SELECT * FROM c WHERE c.price < 100`.
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            init::run_init(&cfg).await?;
        }
        Commands::Status => {
            status::run_status(&cfg).await?;
        }
        Commands::Seed { count } => {
            seed::run_seed(&cfg, count).await?;
        }
        Commands::Query { action } => match action {
            QueryAction::Products => {
                query::run_products(&cfg).await?;
            }
            QueryAction::Categories => {
                query::run_categories(&cfg).await?;
            }
            QueryAction::Sql { query } => {
                query::run_sql(&cfg, &query).await?;
            }
        },
    }

    Ok(())
}
