// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Game scoring.
//!
//! Rallies are replayed in the order they were played. The home team
//! serves first and the team serving after a rally is awarded the point.

use super::rally::{Rally, RallyError, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("rally {index} ({notation}): {source}")]
    Rally {
        index: usize,
        notation: String,
        #[source]
        source: RallyError,
    },

    #[error("rally {index} ({notation}) was served by the wrong team")]
    WrongTeamServing { index: usize, notation: String },

    #[error("no rallies recorded")]
    NoRallies,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    fn award(&mut self, team: Team) {
        match team {
            Team::Home => self.home += 1,
            Team::Away => self.away += 1,
        }
    }

    /// Team with more points, `None` on a tie.
    pub fn leader(&self) -> Option<Team> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Team::Home),
            std::cmp::Ordering::Less => Some(Team::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A game replayed from its rally notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub rallies: Vec<Rally>,
    pub score: Score,
    pub winner: Option<Team>,
}

impl Game {
    /// Parse every line (oldest first) and score the game.
    pub fn from_notation<I, S>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rallies = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                Rally::parse(line.as_ref()).map_err(|source| GameError::Rally {
                    index: index + 1,
                    notation: line.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::play(rallies)
    }

    /// Score already parsed rallies.
    pub fn play(rallies: Vec<Rally>) -> Result<Self, GameError> {
        if rallies.is_empty() {
            return Err(GameError::NoRallies);
        }

        let mut serving = Team::Home;
        let mut score = Score::default();

        for (index, rally) in rallies.iter().enumerate() {
            let (Some(first), Some(last)) = (rally.first(), rally.last()) else {
                continue;
            };

            if first.actor.team() != serving {
                return Err(GameError::WrongTeamServing {
                    index: index + 1,
                    notation: rally.notation.clone(),
                });
            }

            let on_serving_team = last.actor.team() == serving;
            if last.success != on_serving_team {
                serving = serving.other();
            }
            score.award(serving);
        }

        log::debug!("Scored {} rallies: {}-{}", rallies.len(), score.home, score.away);

        Ok(Self {
            winner: score.leader(),
            rallies,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_GAME: [&str; 9] = [
        "1343121p",
        "143412n",
        "3121p",
        "234321s23w43p",
        "4a1",
        "4n",
        "14342123431213w4n",
        "1a3",
        "13432w1s2p",
    ];

    #[test]
    fn test_sample_game_score() {
        let game = Game::from_notation(SAMPLE_GAME).unwrap();
        // Points go H, A, H, A, A, H, H, H, H.
        assert_eq!(game.rallies.len(), 9);
        assert_eq!(game.score, Score { home: 6, away: 3 });
        assert_eq!(game.winner, Some(Team::Home));
    }

    #[test]
    fn test_wrong_team_serving() {
        let err = Game::from_notation(["3121p"]).unwrap_err();
        assert_eq!(
            err,
            GameError::WrongTeamServing {
                index: 1,
                notation: "3121p".to_string()
            }
        );
    }

    #[test]
    fn test_parse_error_reports_rally() {
        let err = Game::from_notation(["1a3", "12"]).unwrap_err();
        assert!(matches!(err, GameError::Rally { index: 2, .. }));
        assert!(err.to_string().contains("rally 2 (12)"));
    }

    #[test]
    fn test_tie_has_no_winner() {
        // Home holds serve, then misses it.
        let game = Game::from_notation(["1a3", "1n"]).unwrap();
        assert_eq!(game.score, Score { home: 1, away: 1 });
        assert_eq!(game.winner, None);
    }

    #[test]
    fn test_no_rallies() {
        let lines: [&str; 0] = [];
        assert_eq!(Game::from_notation(lines).unwrap_err(), GameError::NoRallies);
    }
}
