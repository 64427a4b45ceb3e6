//! Hudl CSV export format implementation
//!
//! Hudl imports a fixed 21-column sheet where every field is double-quoted.
//! Only a handful of columns are derived from the play log; the rest are
//! film-breakdown columns a coach fills in later inside Hudl, so they are
//! emitted empty to keep the column count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::play::{Play, Possession};

use super::format::ExportFormat;

/// Hudl column names, in sheet order
pub const HUDL_COLUMNS: [&str; HUDL_COLUMN_COUNT] = [
    "QTR",
    "PLAY #",
    "ODK",
    "DN",
    "DIST",
    "YARD LN",
    "PLAY TYPE",
    "FRONT",
    "FORMATION",
    "OWL OFF FORMATION",
    "PLAY",
    "OWL OFF PLAY",
    "MOTION",
    "TAG 1",
    "TAG 2",
    "GN/LS",
    "OPP COV",
    "NOTES",
    "LINE GAME",
    "RESULT",
    "PENALTY",
];

pub const HUDL_COLUMN_COUNT: usize = 21;

/// Down value Hudl expects for kicking plays
pub const KICK_DOWN: &str = "0";

/// Field position that counts as midfield on the tracker's 0-100 scale
const MIDFIELD: i64 = 50;

/// How field values are wrapped in quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// Wrap in quotes, leave embedded quotes alone. Byte-compatible with the
    /// sheets the mobile app has always produced.
    #[default]
    Verbatim,
    /// Wrap in quotes and double embedded quotes.
    Rfc4180,
}

impl Quoting {
    pub fn quote(&self, field: &str) -> String {
        match self {
            Self::Verbatim => format!("\"{}\"", field),
            Self::Rfc4180 => format!("\"{}\"", field.replace('"', "\"\"")),
        }
    }
}

/// Convert a 0-100 field position into Hudl's signed yard line.
///
/// Own half (0..=50) is negative and reaches -1 at midfield, the far half is
/// positive starting at 1. There is no zero yard line. Positions outside
/// 0-100 are converted with the same formula.
pub fn signed_yard_line(start_yard: i32) -> i64 {
    let start_yard = i64::from(start_yard);
    if start_yard <= MIDFIELD {
        -(MIDFIELD - start_yard + 1)
    } else {
        start_yard - MIDFIELD
    }
}

/// DN and DIST column values for a play.
///
/// Kicking plays always report down "0". Distance is blank whenever the down
/// column reads "0".
pub fn down_and_distance(play: &Play) -> (String, String) {
    let down = if play.category.is_kick_play() {
        KICK_DOWN.to_string()
    } else {
        play.recorded_down()
            .map(|down| down.to_string())
            .unwrap_or_default()
    };

    let distance = if down == KICK_DOWN {
        String::new()
    } else {
        play.recorded_distance()
            .map(|distance| distance.to_string())
            .unwrap_or_default()
    };

    (down, distance)
}

/// One play projected onto the Hudl columns.
///
/// Film-breakdown columns are always empty and are only materialized by
/// [`HudlRow::fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudlRow<'a> {
    pub quarter: &'a str,
    pub play_number: u64,
    pub odk: Possession,
    pub down: String,
    pub distance: String,
    pub yard_line: Option<i64>,
    pub play_type: &'a str,
    pub gain_loss: &'a str,
    pub result: &'a str,
    pub penalty: &'a str,
}

impl<'a> HudlRow<'a> {
    pub fn from_play(index: usize, play: &'a Play) -> Self {
        let (down, distance) = down_and_distance(play);

        Self {
            quarter: play
                .quarter
                .as_deref()
                .map(|quarter| quarter.strip_prefix('Q').unwrap_or(quarter))
                .unwrap_or(""),
            play_number: play.number_or(index),
            odk: play.possession_or_default(),
            down,
            distance,
            yard_line: play.start_yard.map(signed_yard_line),
            play_type: play.category.play_type(),
            gain_loss: play
                .yards
                .as_deref()
                .filter(|yards| !yards.is_empty())
                .unwrap_or("0"),
            result: play.category.result(),
            penalty: play.penalty_name.as_deref().unwrap_or(""),
        }
    }

    /// All 21 column values in sheet order
    pub fn fields(&self) -> [String; HUDL_COLUMN_COUNT] {
        [
            self.quarter.to_string(),
            self.play_number.to_string(),
            self.odk.short_name().to_string(),
            self.down.clone(),
            self.distance.clone(),
            self.yard_line
                .map(|yard_line| yard_line.to_string())
                .unwrap_or_default(),
            self.play_type.to_string(),
            String::new(), // FRONT
            String::new(), // FORMATION
            String::new(), // OWL OFF FORMATION
            String::new(), // PLAY
            String::new(), // OWL OFF PLAY
            String::new(), // MOTION
            String::new(), // TAG 1
            String::new(), // TAG 2
            self.gain_loss.to_string(),
            String::new(), // OPP COV
            String::new(), // NOTES
            String::new(), // LINE GAME
            self.result.to_string(),
            self.penalty.to_string(),
        ]
    }
}

/// Hudl CSV exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct HudlExporter {
    quoting: Quoting,
}

impl HudlExporter {
    pub fn new(quoting: Quoting) -> Self {
        Self { quoting }
    }

    fn quote_line<S: AsRef<str>>(&self, fields: &[S]) -> String {
        fields
            .iter()
            .map(|field| self.quoting.quote(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl ExportFormat for HudlExporter {
    fn header(&self) -> Option<String> {
        Some(self.quote_line(&HUDL_COLUMNS))
    }

    fn format_row(&self, index: usize, play: &Play) -> String {
        self.quote_line(&HudlRow::from_play(index, play).fields())
    }
}

/// Render a play log as a Hudl CSV sheet with the default quoting.
pub fn generate_hudl_csv(plays: &[Play]) -> String {
    debug!("Encoding {} plays as Hudl CSV", plays.len());
    HudlExporter::default().format_rows(plays)
}
