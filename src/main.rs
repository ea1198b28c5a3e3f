mod commands;

use std::process::ExitCode;

use commands::CommandLine;
use holiday_export::{Pipeline, Result, RunReport};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Diagnostics go to stderr so the data files and stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(commands: CommandLine) -> Result<RunReport> {
    let (config, mode) = commands.into_run()?;
    Pipeline::new(config)?.run(mode).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    init_logging();

    match run(commands).await {
        Ok(RunReport::Dates { exports }) => {
            for (kind, path, summary) in exports {
                tracing::info!(
                    kind = %kind,
                    path = %path.display(),
                    records = summary.records,
                    skipped_years = summary.skipped_years,
                    "wrote holidays"
                );
            }
            ExitCode::SUCCESS
        }
        Ok(RunReport::Enum { path, countries }) => {
            tracing::info!(path = %path.display(), countries, "wrote country enumeration");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error[{}]: {e}", e.error_code());
            ExitCode::from(e.exit_code())
        }
    }
}
