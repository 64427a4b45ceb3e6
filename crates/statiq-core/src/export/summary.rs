//! Game summary shown before export and written as a JSON game record.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::play::{Play, PlayCategory, TeamInfo};

/// Winner label used when the scores are level
pub const TIE: &str = "TIE";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub home_team: String,
    pub away_team: String,
    pub final_score: String,
    pub winner: String,
    pub quarter: Option<String>,
    pub clock: Option<String>,
    pub date: String,
    pub time: String,
}

/// Play counts by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatistics {
    pub total_plays: usize,
    pub touchdowns: usize,
    pub field_goals: usize,
    pub field_goals_made: usize,
    pub field_goals_missed: usize,
    pub safeties: usize,
    pub interceptions: usize,
    pub fumbles: usize,
    pub penalties: usize,
    pub sacks: usize,
}

impl GameStatistics {
    pub fn from_plays(plays: &[Play]) -> Self {
        let mut stats = Self {
            total_plays: plays.len(),
            ..Self::default()
        };

        for play in plays {
            let category = &play.category;
            if category.is_touchdown() || category.as_str() == "touchdown" {
                stats.touchdowns += 1;
            }

            match category {
                PlayCategory::FieldGoal => stats.field_goals_made += 1,
                PlayCategory::FieldGoalMissed => stats.field_goals_missed += 1,
                PlayCategory::Safety => stats.safeties += 1,
                PlayCategory::Interception | PlayCategory::InterceptionTd => {
                    stats.interceptions += 1
                }
                PlayCategory::Fumble | PlayCategory::FumbleTd => stats.fumbles += 1,
                PlayCategory::Penalty => stats.penalties += 1,
                PlayCategory::Sack => stats.sacks += 1,
                _ => {}
            }
        }

        // Game records count made kicks as field goals; misses only in their own tally
        stats.field_goals = stats.field_goals_made;
        stats
    }
}

/// Full game record: scoreboard, the raw play log and outcome counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary<'a> {
    pub game_info: GameInfo,
    pub plays: &'a [Play],
    pub statistics: GameStatistics,
}

impl<'a> GameSummary<'a> {
    pub fn new(
        plays: &'a [Play],
        home: &TeamInfo,
        away: &TeamInfo,
        quarter: Option<&str>,
        clock: Option<&str>,
        at: DateTime<Local>,
    ) -> Self {
        let game_info = GameInfo {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            final_score: format!("{} - {}", home.score, away.score),
            winner: winner(home, away).to_string(),
            quarter: quarter.map(str::to_string),
            clock: clock.map(str::to_string),
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
        };

        Self {
            game_info,
            plays,
            statistics: GameStatistics::from_plays(plays),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One-line scoreboard, e.g. `Joshua 21 - 14 Eagles (38 plays)`
    pub fn headline(&self) -> String {
        format!(
            "{} {} {} ({} plays)",
            self.game_info.home_team,
            self.game_info.final_score,
            self.game_info.away_team,
            self.statistics.total_plays
        )
    }
}

/// Name of the leading team, or [`TIE`]
pub fn winner<'a>(home: &'a TeamInfo, away: &'a TeamInfo) -> &'a str {
    if home.score > away.score {
        &home.name
    } else if away.score > home.score {
        &away.name
    } else {
        TIE
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn kickoff_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 9, 12, 19, 5, 30).unwrap()
    }

    #[test]
    fn test_statistics_counts() {
        let plays: Vec<Play> = [
            "run",
            "run-td",
            "pass-td",
            "touchdown",
            "fieldgoal",
            "fieldgoal",
            "fieldgoal-missed",
            "safety",
            "interception",
            "interception-td",
            "fumble",
            "fumble-td",
            "penalty",
            "sack",
            "sack",
            "timeout",
        ]
        .iter()
        .map(|tag| Play::new(tag))
        .collect();

        let stats = GameStatistics::from_plays(&plays);
        assert_eq!(stats.total_plays, 16);
        assert_eq!(stats.touchdowns, 5);
        assert_eq!(stats.field_goals, 2);
        assert_eq!(stats.field_goals_made, 2);
        assert_eq!(stats.field_goals_missed, 1);
        assert_eq!(stats.safeties, 1);
        assert_eq!(stats.interceptions, 2);
        assert_eq!(stats.fumbles, 2);
        assert_eq!(stats.penalties, 1);
        assert_eq!(stats.sacks, 2);
    }

    #[test]
    fn test_missed_field_goal_not_counted_as_field_goal() {
        let plays = vec![Play::new("fieldgoal"), Play::new("fieldgoal-missed")];
        let stats = GameStatistics::from_plays(&plays);
        assert_eq!(stats.field_goals, 1);
        assert_eq!(stats.field_goals_made, 1);
        assert_eq!(stats.field_goals_missed, 1);
    }

    #[test]
    fn test_winner() {
        let home = TeamInfo::new("Joshua", 21);
        let away = TeamInfo::new("Eagles", 14);
        assert_eq!(winner(&home, &away), "Joshua");
        assert_eq!(winner(&away, &home), "Joshua");
        assert_eq!(winner(&home, &TeamInfo::new("Eagles", 21)), TIE);
    }

    #[test]
    fn test_summary_game_info() {
        let plays = vec![Play::new("run"), Play::new("pass-td")];
        let home = TeamInfo::new("Joshua", 7);
        let away = TeamInfo::new("Eagles", 10);
        let summary = GameSummary::new(
            &plays,
            &home,
            &away,
            Some("Q4"),
            Some("0:00"),
            kickoff_time(),
        );

        assert_eq!(summary.game_info.final_score, "7 - 10");
        assert_eq!(summary.game_info.winner, "Eagles");
        assert_eq!(summary.game_info.date, "2025-09-12");
        assert_eq!(summary.game_info.time, "19:05:30");
        assert_eq!(summary.headline(), "Joshua 7 - 10 Eagles (2 plays)");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let plays = vec![Play {
            start_yard: Some(30),
            ..Play::new("run")
        }];
        let home = TeamInfo::new("Joshua", 0);
        let away = TeamInfo::new("Eagles", 0);
        let summary = GameSummary::new(&plays, &home, &away, None, None, kickoff_time());
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["gameInfo"]["homeTeam"], "Joshua");
        assert_eq!(value["gameInfo"]["winner"], "TIE");
        assert_eq!(value["statistics"]["totalPlays"], 1);
        assert_eq!(value["plays"][0]["category"], "run");
        assert_eq!(value["plays"][0]["startYard"], 30);
    }
}
