//! CM-7 Operational Audit Trail — Demo CLI
//!
//! Builds the CM-7 operation log, fingerprints every step, and renders the
//! result as text, HTML, or JSON.
//!
//! Usage:
//!   cargo run -p demo -- show
//!   cargo run -p demo -- show --format html --output cm7.html
//!   cargo run -p demo -- show --catalog crates/cm7-trace/catalogs/cm7.toml
//!   cargo run -p demo -- fingerprint OP-001 2024-01-01T00:00:00.000Z Test

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cm7_contracts::{Cm7Error, Cm7Result};
use cm7_report::{render, ReportFormat};
use cm7_trace::{fingerprint, verify_log, OperationLogBuilder, StepCatalog};

// ── CLI definition ────────────────────────────────────────────────────────────

/// CM-7 — operational audit trail demo.
#[derive(Parser)]
#[command(
    name = "cm7-demo",
    about = "CM-7 operational audit trail demo",
    long_about = "Builds the CM-7 operation log with a traceability hash per step\n\
                  and renders it as a text, HTML, or JSON report."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the operation log and render it.
    Show {
        /// Step catalog TOML to build from instead of the built-in sequence.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Report format.
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Write the report here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the traceability hash of a single operation.
    Fingerprint {
        operation_id: String,
        timestamp: String,
        description: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Html,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Html => ReportFormat::Html,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Show {
            catalog,
            format,
            output,
        } => run_show(catalog.as_deref(), format.into(), output.as_deref()),
        Command::Fingerprint {
            operation_id,
            timestamp,
            description,
        } => {
            println!("{}", fingerprint(&operation_id, &timestamp, &description));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_show(catalog: Option<&Path>, format: ReportFormat, output: Option<&Path>) -> Cm7Result<()> {
    let builder = match catalog {
        Some(path) => OperationLogBuilder::from_catalog(&StepCatalog::from_file(path)?)?,
        None => OperationLogBuilder::builtin(),
    };

    let log = builder.build();
    info!(
        record_count = log.len(),
        fingerprints_valid = verify_log(&log),
        "operation log ready"
    );

    let report = render(&log, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| Cm7Error::OutputFailed {
                reason: format!("failed to write report to '{}': {}", path.display(), e),
            })?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}
