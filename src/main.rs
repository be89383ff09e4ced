use qr_export_normalizer::{run, TargetZone, DEFAULT_ZONE};

use std::{path::PathBuf, process};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Normalize a QR payment message export into account-keyed CSV.
#[derive(Parser)]
#[command(name = "qr-export-normalizer")]
struct Cli {
    /// Input CSV export (timestamp, message, iam_id)
    input: PathBuf,

    /// Output CSV file
    output: PathBuf,

    /// IANA time zone output timestamps are rendered in
    #[arg(long, default_value = DEFAULT_ZONE)]
    zone: TargetZone,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli.input, &cli.output, cli.zone) {
        Ok(summary) => info!(
            read = summary.read(),
            written = summary.written(),
            skipped = summary.skipped(),
            "CSV transformation completed successfully. Output written to {}",
            cli.output.display()
        ),
        Err(err) => {
            error!(
                input = %cli.input.display(),
                output = %cli.output.display(),
                "transformation failed: {err}"
            );
            process::exit(1);
        }
    }
}
