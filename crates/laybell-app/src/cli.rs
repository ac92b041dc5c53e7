use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// laybell — parametric dimensions and label-path checks for the vial label applicator.
#[derive(Parser, Debug)]
#[command(name = "laybell", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Named profile from `[profiles.<name>]`.
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the resolved configuration.
    Check,
    /// Print the label path report.
    Path {
        /// Exit with failure when the path has any issue.
        #[arg(long)]
        strict: bool,
    },
    /// Print the resolved configuration as JSON.
    Show,
    /// Print the component placement manifest as JSON.
    Layout,
    /// List available profiles.
    Profiles,
    /// Write the default config to a path.
    Init { path: PathBuf },
    /// Write the resolved configuration (merged and derived) to a path.
    Export { path: PathBuf },
}

pub fn parse() -> Args {
    Args::parse()
}
