//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::play::Play;

use super::format::ExportFormat;
use super::hudl::signed_yard_line;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, index: usize, play: &Play) -> String {
        format_json_entry(index, play).to_string()
    }
}

/// Generate JSON entry for a single play, with the derived Hudl values
/// alongside the raw tracker fields.
pub fn format_json_entry(index: usize, play: &Play) -> JsonValue {
    json!({
        "playNumber": play.number_or(index),
        "quarter": play.quarter,
        "category": play.category.as_str(),
        "playType": play.category.play_type(),
        "result": play.category.result(),
        "possession": play.possession_or_default().short_name(),
        "player": play.player,
        "player2": play.player2,
        "startYard": play.start_yard,
        "endYard": play.end_yard,
        "yardLine": play.start_yard.map(signed_yard_line),
        "yards": play.yards,
        "down": play.recorded_down(),
        "distance": play.recorded_distance(),
        "penaltyName": play.penalty_name,
        "gameClock": play.game_clock,
        "timestamp": play.timestamp,
    })
}
