//! userfetch - Look up user records from the command line
//!
//! Resolves each user id through a [`UserStore`] and prints one JSON record
//! per line. Repeated ids are answered from the in-memory cache.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use userfetch::cli::Cli;
use userfetch::{FetchConfig, Fetcher, UserStore};

/// Installs stderr logging; `RUST_LOG` wins over the verbosity flag
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FetchConfig::from_cli(&cli)?;
    let mut store = UserStore::new(Fetcher::http(&config)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for user_id in &cli.user_ids {
        let record = store.get(user_id).await?;
        serde_json::to_writer(&mut out, record.as_ref())?;
        writeln!(out)?;
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
