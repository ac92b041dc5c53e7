//! Subcommand dispatch.

use crate::cli::{Args, Command};
use crate::report::render_path_report;
use laybell_common::{ConfigError, LaybellError, Result};
use laybell_config::{toml_loader, validation, Configuration, ProfileStore};
use laybell_path::AssemblyLayout;
use tracing::{info, warn};

/// Run the selected subcommand. `Ok(false)` means the command ran but its
/// checks failed.
pub fn run(args: &Args) -> Result<bool> {
    let store = match &args.config {
        Some(path) => {
            info!("Using config override: {}", path.display());
            ProfileStore::new(path)
        }
        None => ProfileStore::discover(),
    };
    let profile = args.profile.as_deref();

    match &args.command {
        Command::Check => check(&store.load(profile)?, profile),
        Command::Path { strict } => path(&store.load(profile)?, *strict),
        Command::Show => {
            println!("{}", laybell_config::config_to_json(&store.load(profile)?));
            Ok(true)
        }
        Command::Layout => {
            let layout = AssemblyLayout::from_config(&store.load(profile)?)?;
            let json = serde_json::to_string_pretty(&layout.manifest())
                .map_err(|e| LaybellError::Other(format!("failed to serialize manifest: {e}")))?;
            println!("{json}");
            Ok(true)
        }
        Command::Profiles => {
            for name in store.profile_names()? {
                println!("{name}");
            }
            Ok(true)
        }
        Command::Init { path } => {
            toml_loader::create_default_config(path)?;
            println!("Wrote default config to {}", path.display());
            Ok(true)
        }
        Command::Export { path } => {
            laybell_config::save_resolved_config(&store.load(profile)?, path)?;
            println!("Wrote resolved config to {}", path.display());
            Ok(true)
        }
    }
}

fn check(cfg: &Configuration, profile: Option<&str>) -> Result<bool> {
    let name = profile.unwrap_or("default");
    match validation::validate(cfg) {
        Ok(()) => {
            println!("Config '{name}' passed validation ({} keys)", cfg.len());
            Ok(true)
        }
        Err(ConfigError::InvalidConfig(issues)) => {
            println!("Config '{name}' FAILED validation ({} issues):", issues.len());
            for issue in &issues {
                println!("  ✗ {issue}");
            }
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

fn path(cfg: &Configuration, strict: bool) -> Result<bool> {
    let analysis = laybell_path::analyze(cfg)?;
    let label_width = cfg.require("label_width")?;
    let min_bend_radius = cfg.require("min_bend_radius")?;
    print!(
        "{}",
        render_path_report(&analysis, label_width, min_bend_radius)
    );

    for issue in &analysis.report.issues {
        warn!("label path: {issue}");
    }
    if strict && !analysis.report.is_valid() {
        return Ok(false);
    }
    Ok(true)
}
