// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Game report for serialization.
//!
//! Bundles the scored game with player names and per-player statistics
//! in the shape written to JSON and YAML.

use super::game::{Game, GameError, Score};
use super::rally::{Slot, Team};
use super::stats::{game_stats, PlayerStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub slot: Slot,
    pub name: String,
    pub team: Team,
    pub stats: PlayerStats,
}

/// Complete game data for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub score: Score,
    pub winner: Option<Team>,
    pub players: Vec<PlayerReport>,
    pub rallies: Vec<String>,
}

impl GameReport {
    /// Build a report from an already scored game.
    pub fn new(game: &Game, names: &[String; 4]) -> Self {
        let stats = game_stats(game);
        let players = Slot::ALL
            .iter()
            .map(|&slot| PlayerReport {
                slot,
                name: names[slot.index()].clone(),
                team: slot.team(),
                stats: stats[slot.index()],
            })
            .collect();

        Self {
            score: game.score,
            winner: game.winner,
            players,
            rallies: game.rallies.iter().map(|r| r.notation.clone()).collect(),
        }
    }

    /// Parse, score and report the given lines (oldest first).
    pub fn from_lines<I, S>(lines: I, names: &[String; 4]) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(&Game::from_notation(lines)?, names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; 4] {
        ["Billy", "Bobby", "Max", "Cole"].map(String::from)
    }

    #[test]
    fn test_report_players() {
        let report = GameReport::from_lines(["1a3", "1n"], &names()).unwrap();
        assert_eq!(report.players.len(), 4);
        assert_eq!(report.players[0].name, "Billy");
        assert_eq!(report.players[2].team, Team::Away);
        assert_eq!(report.players[0].stats.serving, 5.5 + 15.0 * 0.5);
        assert_eq!(report.rallies, vec!["1a3", "1n"]);
        assert_eq!(report.winner, None);
    }

    #[test]
    fn test_report_propagates_errors() {
        assert!(GameReport::from_lines(["4n"], &names()).is_err());
    }
}
