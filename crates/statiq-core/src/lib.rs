//! # statiq-core
//!
//! Core library for exporting StatIQ game play logs.
//!
//! This crate provides:
//! - Play records and the category vocabulary recorded by the game tracker
//! - The Hudl CSV encoder (play type, down/distance, signed yard line, result)
//! - NDJSON play log and JSON game summary exports
//! - Export delivery through pluggable file, share and notice collaborators
//! - Export configuration loaded from TOML

pub mod config;
pub mod error;
pub mod export;
pub mod play;
pub mod prelude;

pub use config::{ExportConfig, ExportConfigBuilder, default_config_path, default_export_dir};
pub use error::{Error, Result};
pub use export::{
    DirectoryStore, ExportFormat, ExportOutcome, FileStore, GameStatistics, GameSummary,
    HUDL_COLUMNS, HudlExport, HudlExporter, HudlRow, JsonExporter, NoShareSheet, Notice,
    Notifier, Quoting, ShareRequest, ShareSheet, export_file_name, generate_hudl_csv,
    signed_yard_line,
};
pub use play::{HudlPlayType, Play, PlayCategory, Possession, TeamInfo};
