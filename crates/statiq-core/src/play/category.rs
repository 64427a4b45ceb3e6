use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Substrings that mark a kicking-situation snap.
const KICK_MARKERS: [&str; 4] = ["kickoff", "kickoff-return", "kickoff-touchback", "punt"];

/// Suffix the game tracker appends to a category when the play scored.
pub const TOUCHDOWN_SUFFIX: &str = "-td";

/// What happened on a single recorded play.
///
/// Known tags get their own variant. Anything else is kept verbatim in
/// [`PlayCategory::Other`] so new tags from the tracker flow through the
/// encoder untouched instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum PlayCategory {
    #[strum(serialize = "run")]
    Run,
    #[strum(serialize = "run-td")]
    RunTd,
    #[strum(serialize = "pass")]
    Pass,
    #[strum(serialize = "pass-td")]
    PassTd,
    #[strum(serialize = "incomplete")]
    Incomplete,
    #[strum(serialize = "sack")]
    Sack,
    #[strum(serialize = "interception")]
    Interception,
    #[strum(serialize = "interception-td")]
    InterceptionTd,
    #[strum(serialize = "fumble")]
    Fumble,
    #[strum(serialize = "fumble-td")]
    FumbleTd,
    #[strum(serialize = "punt")]
    Punt,
    #[strum(serialize = "punt-return-td")]
    PuntReturnTd,
    #[strum(serialize = "kickoff-touchback")]
    KickoffTouchback,
    #[strum(serialize = "kickoff-return")]
    KickoffReturn,
    #[strum(serialize = "kickoff-return-td")]
    KickoffReturnTd,
    #[strum(serialize = "fieldgoal")]
    FieldGoal,
    #[strum(serialize = "fieldgoal-missed")]
    FieldGoalMissed,
    #[strum(serialize = "penalty")]
    Penalty,
    #[strum(serialize = "safety")]
    Safety,
    /// Unrecognized tag, carried through as-is
    #[strum(default)]
    Other(String),
}

impl PlayCategory {
    /// Parse a tracker tag. Unknown tags become [`PlayCategory::Other`].
    pub fn from_tag(tag: &str) -> Self {
        // `Other` is the strum default variant, so parsing never fails
        Self::from_str(tag).unwrap_or_default()
    }

    /// The tag exactly as the game tracker records it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Run => "run",
            Self::RunTd => "run-td",
            Self::Pass => "pass",
            Self::PassTd => "pass-td",
            Self::Incomplete => "incomplete",
            Self::Sack => "sack",
            Self::Interception => "interception",
            Self::InterceptionTd => "interception-td",
            Self::Fumble => "fumble",
            Self::FumbleTd => "fumble-td",
            Self::Punt => "punt",
            Self::PuntReturnTd => "punt-return-td",
            Self::KickoffTouchback => "kickoff-touchback",
            Self::KickoffReturn => "kickoff-return",
            Self::KickoffReturnTd => "kickoff-return-td",
            Self::FieldGoal => "fieldgoal",
            Self::FieldGoalMissed => "fieldgoal-missed",
            Self::Penalty => "penalty",
            Self::Safety => "safety",
            Self::Other(raw) => raw,
        }
    }

    /// Kickoffs, touchbacks, kick returns and punts. Down and distance do
    /// not apply to these.
    ///
    /// Matched by substring so unknown tags such as `punt-block` qualify too.
    pub fn is_kick_play(&self) -> bool {
        let tag = self.as_str();
        KICK_MARKERS.iter().any(|marker| tag.contains(marker))
    }

    pub fn is_touchdown(&self) -> bool {
        self.as_str().contains(TOUCHDOWN_SUFFIX)
    }

    /// Coarse play family for the PLAY TYPE column.
    ///
    /// Returns the raw tag when the category has no table entry.
    pub fn play_type(&self) -> &str {
        let family = match self {
            Self::Run | Self::RunTd | Self::Fumble | Self::FumbleTd | Self::Safety => {
                HudlPlayType::Run
            }
            Self::Pass
            | Self::PassTd
            | Self::Incomplete
            | Self::Sack
            | Self::Interception
            | Self::InterceptionTd => HudlPlayType::Pass,
            Self::Punt => HudlPlayType::Punt,
            Self::PuntReturnTd => HudlPlayType::PuntReceive,
            Self::KickoffTouchback | Self::KickoffReturn | Self::KickoffReturnTd => {
                HudlPlayType::KickoffReceive
            }
            Self::FieldGoal | Self::FieldGoalMissed => HudlPlayType::FieldGoal,
            Self::Penalty => HudlPlayType::Penalty,
            Self::Other(raw) => return raw,
        };
        let name: &'static str = family.into();
        name
    }

    /// Human readable outcome for the RESULT column.
    pub fn result(&self) -> &str {
        let tag = self.as_str();
        if self.is_touchdown() {
            return touchdown_result(tag);
        }

        match self {
            Self::Run => "Rush",
            Self::Pass => "Complete",
            Self::Incomplete => "Incomplete",
            Self::Sack => "Sack",
            Self::Interception => "Interception",
            Self::Fumble => "Fumble",
            Self::FieldGoal => "FG Good",
            Self::FieldGoalMissed => "FG Missed",
            Self::Punt => "Punt",
            Self::KickoffTouchback => "Touchback",
            Self::KickoffReturn => "KO Return",
            Self::Penalty => "Penalty",
            Self::Safety => "Safety",
            _ => tag,
        }
    }
}

/// First matching family wins, so `run` is checked before `pass` and so on.
fn touchdown_result(tag: &str) -> &'static str {
    const PHRASES: [(&str, &str); 6] = [
        ("run", "Rush, TD"),
        ("pass", "Complete, TD"),
        ("interception", "Interception, Def TD"),
        ("fumble", "Fumble, Def TD"),
        ("kickoff", "KO Return, TD"),
        ("punt", "Punt Return, TD"),
    ];

    PHRASES
        .iter()
        .find(|(family, _)| tag.contains(family))
        .map(|(_, phrase)| *phrase)
        .unwrap_or("TD")
}

impl Default for PlayCategory {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for PlayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PlayCategory {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PlayCategory> for String {
    fn from(category: PlayCategory) -> Self {
        match category {
            PlayCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Values of the PLAY TYPE column understood by Hudl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
pub enum HudlPlayType {
    Run,
    Pass,
    Punt,
    #[strum(serialize = "Punt Rec")]
    PuntReceive,
    #[strum(serialize = "KO Rec")]
    KickoffReceive,
    #[strum(serialize = "FG")]
    FieldGoal,
    Penalty,
}
