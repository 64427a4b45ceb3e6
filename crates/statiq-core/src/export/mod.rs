//! Export formats for recorded play logs.
//!
//! - **Hudl**: the 21-column quoted CSV sheet Hudl imports
//! - **JSON**: one object per play (NDJSON) with derived Hudl values
//! - **Summary**: scoreboard and outcome counts for a whole game
//! - **Delivery**: file naming and the write/share hand-off to the host

mod delivery;
mod format;
mod hudl;
mod json;
mod summary;

pub use delivery::{
    CSV_MIME_TYPE, CSV_UTI, DirectoryStore, ExportOutcome, FILE_PREFIX, FileStore, HudlExport,
    NoShareSheet, Notice, Notifier, SHARE_DIALOG_TITLE, ShareRequest, ShareSheet,
    export_file_name,
};
pub use format::ExportFormat;
pub use hudl::{
    HUDL_COLUMN_COUNT, HUDL_COLUMNS, HudlExporter, HudlRow, KICK_DOWN, Quoting,
    down_and_distance, generate_hudl_csv, signed_yard_line,
};
pub use json::{JsonExporter, format_json_entry};
pub use summary::{GameInfo, GameStatistics, GameSummary, TIE, winner};
