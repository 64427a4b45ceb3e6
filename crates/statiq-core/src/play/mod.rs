//! Play records captured by the live game tracker.
//!
//! - **Category**: the closed-ish vocabulary of play tags and the lookup
//!   tables derived from it (play type, result wording, kick detection)
//! - **Record**: the per-snap `Play` and the `TeamInfo` scoreboard entry

mod category;
mod record;

pub use category::{HudlPlayType, PlayCategory, TOUCHDOWN_SUFFIX};
pub use record::{Play, Possession, TeamInfo};
