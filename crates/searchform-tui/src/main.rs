//! Searchform entry point.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::Parser;
use searchform_tui::{FormConfig, OutputFormat, Runtime, TerminalDriver, write_records};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Collect keyword/location search criteria from the terminal
#[derive(Parser, Debug)]
#[command(name = "searchform")]
#[command(about = "Collect keyword/location search criteria from the terminal")]
#[command(version)]
struct Args {
    /// Maximum keyword length in characters
    #[arg(long)]
    keyword_limit: Option<usize>,

    /// Maximum location length in characters
    #[arg(long)]
    location_limit: Option<usize>,

    /// Format of the records written to stdout when the session ends
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file. Logging is off without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn form_config(&self) -> FormConfig {
        let mut config = FormConfig::default();
        if let Some(limit) = self.keyword_limit {
            config = config.with_keyword_limit(limit);
        }
        if let Some(limit) = self.location_limit {
            config = config.with_location_limit(limit);
        }
        config
    }
}

/// Install a file-backed subscriber. The terminal itself belongs to the form.
fn init_logging(path: &Path, log_level: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let config = args.form_config();
    tracing::debug!(?config, "starting search form");

    // The driver is dropped inside `run`, so the terminal is restored before
    // anything is written below.
    let records = Runtime::new(TerminalDriver::new()?, &config).run().await?;

    let mut stdout = io::stdout().lock();
    write_records(&mut stdout, &records, args.format)?;
    Ok(())
}
