//! Prelude module for convenient imports
//!
//! ```ignore
//! use statiq_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Play data: `Play`, `PlayCategory`, `Possession`, `TeamInfo`
//! - Exporters: `ExportFormat`, `HudlExporter`, `JsonExporter`, `Quoting`
//! - Delivery: `HudlExport` and its collaborator traits
//! - Error handling: `Error`, `Result`

// Error handling
pub use crate::error::{Error, Result};

// Play data types
pub use crate::play::{Play, PlayCategory, Possession, TeamInfo};

// Export formats
pub use crate::export::{ExportFormat, GameSummary, HudlExporter, JsonExporter, Quoting};

// Delivery
pub use crate::export::{FileStore, HudlExport, Notice, Notifier, ShareSheet};

// Configuration
pub use crate::config::ExportConfig;
