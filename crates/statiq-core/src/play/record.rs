use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::category::PlayCategory;

/// Which unit had the ball on a play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum Possession {
    #[default]
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Offense,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Defense,
    #[serde(rename = "K")]
    #[strum(serialize = "K")]
    Kicking,
}

impl Possession {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

/// A single recorded snap from the live game tracker.
///
/// Field positions use the tracker's 0-100 scale where 50 is midfield.
/// Zero values for `down`, `distance` and `play_number` mean "not recorded".
/// A numeric field holding a value of the wrong shape (negative, fractional,
/// out of range) loads as `None` instead of rejecting the whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    #[serde(default)]
    pub category: PlayCategory,
    #[serde(default)]
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_yard: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_yard: Option<i32>,
    /// Net yardage, already formatted by the tracker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yards: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_clock: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub down: Option<u8>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<u32>,
    /// "Q1".."Q4" or an overtime label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub possession: Option<Possession>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub play_number: Option<u32>,
}

impl Play {
    pub fn new(category: &str) -> Self {
        Self {
            category: PlayCategory::from_tag(category),
            ..Default::default()
        }
    }

    /// Recorded down, ignoring a zero placeholder
    pub fn recorded_down(&self) -> Option<u8> {
        self.down.filter(|down| *down != 0)
    }

    /// Recorded distance, ignoring a zero placeholder
    pub fn recorded_distance(&self) -> Option<u32> {
        self.distance.filter(|distance| *distance != 0)
    }

    /// Sequence number, falling back to the 1-based list position
    pub fn number_or(&self, index: usize) -> u64 {
        match self.play_number {
            Some(number) if number != 0 => u64::from(number),
            _ => index as u64 + 1,
        }
    }

    pub fn possession_or_default(&self) -> Possession {
        self.possession.unwrap_or_default()
    }
}

/// Deserialize an optional field, mapping any value that does not fit `T` to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Summary of one side of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    #[serde(default)]
    pub score: u32,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
