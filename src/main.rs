use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use claim_core::records::{BidRecord, FileRecord, Origin, PassRecord};
use claim_core::store::MemoryRepository;
use claimparse::ingest::{ingest_paths, record_claims, record_outcomes};
use claimparse::{Config, Pipeline};

#[derive(Parser)]
#[command(
    name = "claimparse",
    about = "Normalise claim-application dumps and spreadsheets into JSON claims"
)]
struct Cli {
    /// Export dumps or .xlsx workbooks to parse.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Configuration file (default: $XDG_CONFIG_HOME/claimparse/config.toml).
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Exit with an error when any file failed to parse.
    #[arg(long)]
    strict: bool,

    /// Pass type stamped on the bid and pass records.
    #[arg(long, default_value_t = 0)]
    pass_type: i32,
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("unable to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = Config::load(cli.config.as_deref()).context("unable to load configuration")?;
    let pipeline = Arc::new(Pipeline::from_config(&config).context("invalid form configuration")?);

    let outcomes = ingest_paths(pipeline, cli.paths).await;

    let mut files: MemoryRepository<FileRecord> = MemoryRepository::new();
    let ids = record_outcomes(&mut files, &outcomes)?;
    tracing::debug!(?ids, "file records created");

    let mut bids: MemoryRepository<BidRecord> = MemoryRepository::new();
    let mut passes: MemoryRepository<PassRecord> = MemoryRepository::new();
    let origin = Origin {
        pass_type: cli.pass_type,
        ..Origin::default()
    };
    record_claims(&mut bids, &mut passes, &outcomes, &ids, origin)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };
    println!("{json}");

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if cli.strict && failed > 0 {
        anyhow::bail!("{failed} of {} file(s) failed to parse", outcomes.len());
    }
    Ok(())
}
