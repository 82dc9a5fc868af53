//! modelsync CLI
//!
//! Runs one model operation against a source file and prints a JSON result.
//!
//! # Usage
//!
//! ```bash
//! # Add a reducer
//! modelsync addReducer --payload '{"sourcePath":".","filePath":"src/models/count.js","namespace":"count","name":"add","source":"1"}'
//!
//! # Extract every model of a file
//! modelsync models.info --payload-file payload.json
//!
//! # Verbose logging
//! MODELSYNC_LOG=debug modelsync --config modelsync.yaml info --payload '{"sourcePath":".","filePath":"a.js"}'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use modelsync_core::api::{self, ApiOutput};
use modelsync_core::config::ModelSyncConfig;
use modelsync_core::domain::ModelPayload;
use modelsync_core::errors::{ModelError, Result};
use modelsync_core::usecases::ModelService;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "MODELSYNC_LOG";

#[derive(Parser)]
#[command(name = "modelsync")]
#[command(about = "Query, edit and extract store models in JavaScript/TypeScript sources", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Operation name, with or without the `models.` prefix
    operation: String,

    /// Payload as inline JSON
    #[arg(long, conflicts_with = "payload_file", required_unless_present = "payload_file")]
    payload: Option<String>,

    /// Payload read from a JSON file
    #[arg(long)]
    payload_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => match serde_json::to_string(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize output: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ApiOutput> {
    let config = match &cli.config {
        Some(path) => ModelSyncConfig::from_yaml(path)?,
        None => ModelSyncConfig::default(),
    }
    .with_env_overrides()?;

    let payload = load_payload(cli)?;
    let service = ModelService::new(config);
    api::run(&service, &cli.operation, &payload)
}

fn load_payload(cli: &Cli) -> Result<ModelPayload> {
    let text = match (&cli.payload, &cli.payload_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(ModelError::validation(&cli.operation, "a payload is required"));
        }
    };
    serde_json::from_str(&text)
        .map_err(|e| ModelError::validation(&cli.operation, format!("invalid payload: {e}")))
}
