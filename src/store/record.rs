//! Per-user persistent data

use crate::game::{ActiveGame, EndResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifetime results for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub wins: u32,
    pub losses: u32,
    pub surrenders: u32,
    /// Finished games per language code
    pub plays: BTreeMap<String, u32>,
}

impl UserStats {
    /// Count one finished game
    ///
    /// `Playing` is not a finished game and is ignored.
    pub fn record(&mut self, result: EndResult, language: &str) {
        match result {
            EndResult::Playing => return,
            EndResult::Win => self.wins += 1,
            EndResult::Lose => self.losses += 1,
            EndResult::Surrender => self.surrenders += 1,
        }
        *self.plays.entry(language.to_string()).or_insert(0) += 1;
    }

    #[must_use]
    pub const fn games(&self) -> u32 {
        self.wins + self.losses + self.surrenders
    }
}

/// Everything stored about one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// At most one game at a time
    pub current_game: Option<ActiveGame>,
    pub stats: UserStats,
    /// Render feedback with the colorblind palette
    pub colorblind: bool,
}

impl UserRecord {
    /// The current game, if it is still being played
    #[must_use]
    pub fn playing_game(&self) -> Option<&ActiveGame> {
        self.current_game.as_ref().filter(|game| game.is_playing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_each_outcome() {
        let mut stats = UserStats::default();
        stats.record(EndResult::Win, "en");
        stats.record(EndResult::Win, "fr");
        stats.record(EndResult::Lose, "en");
        stats.record(EndResult::Surrender, "en");

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.surrenders, 1);
        assert_eq!(stats.plays.get("en"), Some(&3));
        assert_eq!(stats.plays.get("fr"), Some(&1));
        assert_eq!(stats.games(), 4);
    }

    #[test]
    fn playing_is_not_counted() {
        let mut stats = UserStats::default();
        stats.record(EndResult::Playing, "en");
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn missing_fields_default() {
        let record: UserRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, UserRecord::default());

        let record: UserRecord = serde_json::from_str(r#"{"stats":{"wins":3}}"#).unwrap();
        assert_eq!(record.stats.wins, 3);
        assert!(record.stats.plays.is_empty());
    }

    #[test]
    fn playing_game_hides_finished_games() {
        let mut record = UserRecord {
            current_game: Some(ActiveGame::new("en", "ab")),
            ..UserRecord::default()
        };
        assert!(record.playing_game().is_some());

        if let Some(game) = record.current_game.as_mut() {
            game.apply_guess("ab").unwrap();
        }
        assert!(record.playing_game().is_none());
    }
}
