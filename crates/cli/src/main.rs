//! # fdns2sqlite
//!
//! Converts a forward-DNS JSON lines file into a SQLite database.

mod bootstrap;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use fdns_sqlite_application::ports::RecordStore;
use fdns_sqlite_application::use_cases::IngestRecordsUseCase;
use fdns_sqlite_domain::{CliOverrides, Config, DomainError, IngestSummary, MalformedLinePolicy};
use fdns_sqlite_infrastructure::codec::JsonRecordDecoder;
use fdns_sqlite_infrastructure::output::resolve_output_path;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};

const READ_BUFFER_BYTES: usize = 1 << 20;

#[derive(Parser, Debug)]
#[command(name = "fdns2sqlite")]
#[command(version)]
#[command(about = "Convert fdns.json to sqlite format, one row per JSON line")]
struct Cli {
    /// Newline-delimited JSON input file
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Records per INSERT transaction
    #[arg(short = 'b', long)]
    batch_size: Option<usize>,

    /// Directory for the output database
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Write an empty row for each malformed line instead of skipping it
    #[arg(long)]
    placeholders: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            batch_size: self.batch_size,
            output_dir: self.output_dir.clone(),
            malformed_lines: self
                .placeholders
                .then_some(MalformedLinePolicy::Placeholder),
            log_level: self.log_level.clone(),
        }
    }
}

/// Where the records went and how the run went.
#[derive(Debug)]
struct Conversion {
    output: PathBuf,
    summary: IngestSummary,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(input) = cli.input.clone() else {
        let mut command = Cli::command();
        return match command.print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    let result = run(&cli, &input).await;
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }
    exit_code(&result)
}

/// Any fatal error or failed batch is a non-zero exit.
fn exit_code(result: &anyhow::Result<Conversion>) -> ExitCode {
    match result {
        Ok(conversion) if !conversion.summary.has_failures() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn run(cli: &Cli, input: &Path) -> anyhow::Result<Conversion> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())
        .context("Invalid configuration")?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        batch_size = config.ingest.batch_size,
        malformed_lines = config.ingest.malformed_lines.as_str(),
        output_dir = %config.output.directory.display(),
        "Configuration loaded"
    );

    let conversion = convert(&config, input).await?;
    println!("Saved to \"{}\".", conversion.output.display());

    if conversion.summary.has_failures() {
        warn!(
            failed_batches = conversion.summary.batches_failed,
            rows_failed = conversion.summary.rows_failed,
            "Some batches were not written"
        );
    }

    Ok(conversion)
}

async fn convert(config: &Config, input: &Path) -> anyhow::Result<Conversion> {
    let output = resolve_output_path(input, &config.output.directory, config.store_extension())
        .await
        .context("Failed to choose output path")?;
    let output = std::path::absolute(&output)
        .with_context(|| format!("Failed to resolve {}", output.display()))?;

    // Open the input before creating the store so a bad path leaves nothing behind
    let file = tokio::fs::File::open(input)
        .await
        .map_err(|e| DomainError::InputRead(format!("{}: {}", input.display(), e)))?;

    let store = bootstrap::init_store(&output, &config.database).await?;

    let ingest = IngestRecordsUseCase::new(Arc::new(JsonRecordDecoder::new()), store.clone())
        .with_batch_size(config.ingest.batch_size)
        .with_policy(config.ingest.malformed_lines);

    let summary = ingest
        .execute(BufReader::with_capacity(READ_BUFFER_BYTES, file))
        .await
        .with_context(|| format!("Failed to ingest {}", input.display()))?;

    let rows = store.row_count().await?;
    store.pool().close().await;

    info!(
        rows,
        skipped = summary.lines_malformed - summary.placeholder_rows,
        placeholders = summary.placeholder_rows,
        failed_rows = summary.rows_failed,
        "Conversion complete"
    );

    Ok(Conversion { output, summary })
}
