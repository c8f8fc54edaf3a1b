//! Command-line interface parsing for userfetch
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated [`FetchConfig`].

use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::fetch::{FetchConfig, API_BASE_URL, MAX_ATTEMPTS};

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The base URL is not an absolute http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The per-attempt timeout is zero
    #[error("Invalid timeout: must be at least 1 second")]
    InvalidTimeout,

    /// Fewer than one attempt was requested
    #[error("Invalid max attempts: {0}. Must be at least 1")]
    InvalidMaxAttempts(u32),
}

/// userfetch - Look up user records from the user API
#[derive(Parser, Debug)]
#[command(name = "userfetch")]
#[command(about = "Fetch user records with bounded retries and an in-memory cache")]
#[command(version)]
pub struct Cli {
    /// User ids to look up; repeated ids are served from the cache
    #[arg(value_name = "USER_ID", required = true)]
    pub user_ids: Vec<String>,

    /// Base URL of the user API
    #[arg(long, value_name = "URL", default_value = API_BASE_URL)]
    pub base_url: String,

    /// Per-attempt request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Attempts per lookup, including the first
    #[arg(long, value_name = "N", default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Log cache and retry activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl FetchConfig {
    /// Creates a FetchConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(FetchConfig)` with the requested settings
    /// * `Err(CliError)` if any value is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let base_url = validate_base_url(&cli.base_url)?;

        if cli.timeout == 0 {
            return Err(CliError::InvalidTimeout);
        }

        if cli.max_attempts == 0 {
            return Err(CliError::InvalidMaxAttempts(cli.max_attempts));
        }

        Ok(FetchConfig {
            base_url,
            timeout: Duration::from_secs(cli.timeout),
            max_attempts: cli.max_attempts,
        })
    }
}

/// Checks that `raw` is an absolute http(s) URL
pub fn validate_base_url(raw: &str) -> Result<String, CliError> {
    let url = Url::parse(raw).map_err(|_| CliError::InvalidBaseUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        _ => Err(CliError::InvalidBaseUrl(raw.to_string())),
    }
}
