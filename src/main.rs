use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use talent_store::api::HttpApi;
use talent_store::config::Config;
use talent_store::logging::init_tracing;
use talent_store::{OperationError, Store};

/// Fetch recruiting resources into their slices and print the resulting state.
#[derive(Parser, Debug)]
#[command(name = "talent-store", version)]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override `api.base_url` from the config file.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log slice activity at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard metrics.
    Dashboard,
    /// All positions, or one with --id.
    Positions {
        #[arg(long)]
        id: Option<u64>,
    },
    /// All question sets, one with --id, or one position's with --position.
    QuestionSets {
        #[arg(long, conflicts_with = "id")]
        position: Option<u64>,
        #[arg(long)]
        id: Option<u64>,
    },
    /// All job roles.
    JobRoles,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let filter = if cli.verbose {
        "talent_store=debug"
    } else {
        config.logging.filter.as_str()
    };
    init_tracing(filter);

    let api = HttpApi::new(&config.api).context("Failed to build API client")?;
    let store = Store::new(Arc::new(api));

    // Dispatch errors are already recorded in slice state; the printed
    // state is the report.
    let failed = match cli.command {
        Command::Dashboard => {
            let slice = store.dashboard();
            let _ = slice.fetch_metrics().await;
            let state = slice.state();
            report(&state, state.error())?
        }
        Command::Positions { id } => {
            let slice = store.positions();
            let _ = match id {
                Some(id) => slice.fetch(id).await.map(|_| ()),
                None => slice.fetch_all().await.map(|_| ()),
            };
            let state = slice.state();
            report(&state, state.error())?
        }
        Command::QuestionSets { position, id } => {
            let slice = store.question_sets();
            let _ = match (position, id) {
                (Some(position_id), _) => slice.fetch_by_position(position_id).await.map(|_| ()),
                (None, Some(id)) => slice.fetch(id).await.map(|_| ()),
                (None, None) => slice.fetch_all().await.map(|_| ()),
            };
            let state = slice.state();
            report(&state, state.error())?
        }
        Command::JobRoles => {
            let slice = store.job_roles();
            let _ = slice.fetch_all().await;
            let state = slice.state();
            report(&state, state.error())?
        }
    };

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print `state` as JSON. Returns true when the slice recorded an error.
fn report<S: Serialize>(state: &S, error: Option<&OperationError>) -> anyhow::Result<bool> {
    println!("{}", serde_json::to_string_pretty(state)?);
    if let Some(error) = error {
        eprintln!("error: {}", error);
    }
    Ok(error.is_some())
}
