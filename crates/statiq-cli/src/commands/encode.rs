//! Encode command for rendering a game without the export hand-off.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use statiq_core::{ExportFormat, HudlExporter, JsonExporter, Quoting};
use tracing::info;

use crate::cli::OutputFormat;
use crate::game::GameFile;

pub fn run(
    game_path: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    quoting: Quoting,
) -> Result<()> {
    let game = GameFile::load(game_path)?;
    info!("Loaded {} plays from {}", game.plays.len(), game_path.display());

    let content = match format {
        OutputFormat::Csv => HudlExporter::new(quoting).format_rows(&game.plays),
        OutputFormat::Json => JsonExporter.format_rows(&game.plays),
    };

    if let Some(output_path) = output {
        fs::write(output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported to: {}", output_path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
