mod cli;
mod config;
mod deps;
mod error;
mod model;
mod pipeline;
#[cfg(all(test, unix))]
mod test_support;

use clap::Parser;
use cli::Cli;
use config::Config;
use deps::SystemProbe;
use error::{Error, Result};
use model::{HubFetcher, UltralyticsExporter};
use std::io::{self, Write};
use std::process::ExitCode;

fn export() -> Result<()> {
    let config = Config::from_env()?;
    tracing::debug!("Using interpreter {:?} for export", config.python);

    let probe = SystemProbe::new(config.python.clone());
    let fetcher = HubFetcher::default();
    let exporter = UltralyticsExporter::new(config.python.clone());

    let summary = pipeline::run(&config, &probe, &fetcher, &exporter)?;
    tracing::info!(
        "Installed {:?} from {:?} (checkpoint {:?}, {} bytes)",
        summary.output_path,
        summary.exported,
        summary.checkpoint,
        summary.size_bytes
    );

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let status = exit_status(export(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(status)
}

/// Reports the outcome of a run and returns the process exit status.
fn exit_status(result: Result<()>, stdout: &mut dyn Write, stderr: &mut dyn Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e @ Error::MissingDependency(_)) => {
            let _ = writeln!(stdout, "ERROR: {}", e);
            1
        }
        Err(e) => {
            let _ = writeln!(stderr, "Error: {}", e);
            1
        }
    }
}
