mod cli;
mod commands;
mod report;

use std::process::ExitCode;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging; stdout is reserved for command output
    let log_directive = args.log_level.as_deref().unwrap_or("laybell=info");
    let directive: Result<Directive, _> = log_directive
        .parse()
        .or_else(|_| "laybell=info".parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("laybell v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
