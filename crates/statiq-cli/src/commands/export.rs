//! Export command: save a Hudl sheet and hand it to the system.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::Utc;
use statiq_core::{
    DirectoryStore, ExportConfig, GameSummary, HudlExport, HudlExporter, export_file_name,
};
use tracing::info;

use crate::game::GameFile;
use crate::host::{ConsoleNotifier, SystemShareSheet};

pub fn run(game_path: &Path, config: &ExportConfig) -> Result<()> {
    let game = GameFile::load(game_path)?;

    let summary = GameSummary::new(
        &game.plays,
        &game.home,
        &game.away,
        game.quarter.as_deref(),
        game.clock.as_deref(),
        chrono::Local::now(),
    );
    eprintln!("{}", summary.headline());

    let date = Utc::now().date_naive();
    let file_name = export_file_name(&game.home.name, &game.away.name, date);
    info!(
        "Exporting {} plays to {}",
        game.plays.len(),
        config.export_dir.display()
    );

    let export = HudlExport::new(
        DirectoryStore::new(&config.export_dir),
        SystemShareSheet::new(config.share),
        ConsoleNotifier,
    )
    .with_exporter(HudlExporter::new(config.quoting));

    if !export.export_dated(&game.plays, &game.home, &game.away, date) {
        bail!("Export failed");
    }

    println!("{}", config.export_dir.join(file_name).display());
    Ok(())
}
