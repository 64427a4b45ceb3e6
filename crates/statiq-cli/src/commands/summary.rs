//! Summary command: scoreboard and play counts for a recorded game.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use statiq_core::{GameStatistics, GameSummary};

use crate::game::GameFile;

pub fn run(game_path: &Path, json: bool) -> Result<()> {
    let game = GameFile::load(game_path)?;
    let summary = GameSummary::new(
        &game.plays,
        &game.home,
        &game.away,
        game.quarter.as_deref(),
        game.clock.as_deref(),
        chrono::Local::now(),
    );

    if json {
        println!("{}", summary.to_json_pretty()?);
        return Ok(());
    }

    println!("{}", summary.headline().bold());
    println!("Winner: {}", summary.game_info.winner);
    if let Some(quarter) = &summary.game_info.quarter {
        println!("Quarter: {}", quarter);
    }
    println!();
    for (label, count) in statistic_rows(&summary.statistics) {
        println!("  {:<20} {}", label, count);
    }

    Ok(())
}

fn statistic_rows(stats: &GameStatistics) -> [(&'static str, usize); 9] {
    [
        ("Touchdowns", stats.touchdowns),
        ("Field goals made", stats.field_goals_made),
        ("Field goals missed", stats.field_goals_missed),
        ("Safeties", stats.safeties),
        ("Interceptions", stats.interceptions),
        ("Fumbles", stats.fumbles),
        ("Penalties", stats.penalties),
        ("Sacks", stats.sacks),
        ("Total plays", stats.total_plays),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistic_rows_order() {
        let stats = GameStatistics {
            total_plays: 40,
            touchdowns: 3,
            ..Default::default()
        };
        let rows = statistic_rows(&stats);
        assert_eq!(rows[0], ("Touchdowns", 3));
        assert_eq!(rows[8], ("Total plays", 40));
    }
}
