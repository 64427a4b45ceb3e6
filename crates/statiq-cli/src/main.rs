use anyhow::{Context, Result};
use clap::Parser;
use statiq_core::{ExportConfig, Quoting, default_config_path};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod game;
mod host;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("statiq={}", level).parse()?)
                .add_directive(format!("statiq_core={}", level).parse()?),
        )
        .init();

    let config = load_config(&cli)?;

    match cli.command {
        Command::Encode {
            game,
            output,
            format,
            rfc4180,
        } => commands::encode::run(&game, output.as_deref(), format, quoting(rfc4180, &config)),
        Command::Export {
            game,
            dir,
            no_share,
            rfc4180,
        } => {
            let mut config = config;
            if let Some(dir) = dir {
                config.export_dir = dir;
            }
            if no_share {
                config.share = false;
            }
            config.quoting = quoting(rfc4180, &config);
            commands::export::run(&game, &config)
        }
        Command::Summary { game, json } => commands::summary::run(&game, json),
    }
}

fn load_config(cli: &Cli) -> Result<ExportConfig> {
    let path = match cli.config.clone().or_else(default_config_path) {
        Some(path) => path,
        None => {
            debug!("No config directory on this platform, using defaults");
            return Ok(ExportConfig::default());
        }
    };

    let config = ExportConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!("Export directory: {}", config.export_dir.display());
    Ok(config)
}

/// `--rfc4180` forces hardened quoting; otherwise the configured mode applies
fn quoting(rfc4180: bool, config: &ExportConfig) -> Quoting {
    if rfc4180 {
        Quoting::Rfc4180
    } else {
        config.quoting
    }
}
