// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-player statistics.
//!
//! Counts every touch a player made or received across the game and folds
//! the counts into four weighted scores.

use super::game::Game;
use super::rally::{Slot, Strength, TouchKind};
use serde::{Deserialize, Serialize};

/// Games longer than this many rallies have their defense score scaled down.
const REFERENCE_RALLIES: usize = 39;
const PRECISION: i32 = 4;

/// Raw touch counts for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    aces: u32,
    aced: u32,
    serves_made: u32,
    total_serves: u32,
    spikes_returned: u32,
    total_spikes: u32,
    defenses_made: u32,
    defenses_missed: u32,
    missed_sets: u32,
    missed_spikes: u32,
    tough_touches: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total: f64,
    pub hitting: f64,
    pub defense: f64,
    pub serving: f64,
    pub cleanliness: f64,
}

fn round(value: f64) -> f64 {
    let factor = 10f64.powi(PRECISION);
    (value * factor).round() / factor
}

/// `numerator / denominator`, or `None` when nothing was attempted.
fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

fn tally(game: &Game, player: Slot) -> Tally {
    let mut t = Tally::default();

    for touch in game.rallies.iter().flat_map(|r| &r.touches) {
        if touch.actor == player {
            let weak = touch.strength == Some(Strength::Weak);
            match touch.kind {
                TouchKind::Service => {
                    t.total_serves += 1;
                    if touch.success {
                        t.serves_made += 1;
                        if touch.ace {
                            t.aces += 1;
                        }
                    }
                }
                TouchKind::Defense => {
                    if touch.success {
                        t.defenses_made += 1;
                    } else {
                        t.defenses_missed += 1;
                    }
                    if weak {
                        t.tough_touches += 1;
                    }
                }
                TouchKind::Set => {
                    if !touch.success {
                        t.missed_sets += 1;
                    }
                    if weak {
                        t.tough_touches += 1;
                    }
                }
                TouchKind::Spike => {
                    t.total_spikes += 1;
                    if touch.success {
                        t.spikes_returned += 1;
                    } else {
                        t.missed_spikes += 1;
                    }
                }
            }
        }

        if touch.target == Some(player) && touch.kind == TouchKind::Service && touch.ace {
            t.aced += 1;
        }
    }

    t
}

/// Score one player over the whole game.
pub fn player_stats(game: &Game, player: Slot) -> PlayerStats {
    let t = tally(game, player);
    let rallies = game.rallies.len();
    let weight = if rallies <= REFERENCE_RALLIES {
        1.0
    } else {
        REFERENCE_RALLIES as f64 / rallies as f64
    };

    let hitting = ratio(t.spikes_returned, t.total_spikes)
        .map(|r| round(20.0 * (1.0 - r)))
        .unwrap_or(0.0);
    let defense = round(
        (t.defenses_missed as f64 + 0.4 * hitting * t.defenses_made as f64) * weight,
    );
    let serving = ratio(t.serves_made, t.total_serves)
        .map(|r| round(5.5 * t.aces as f64 + 15.0 * r))
        .unwrap_or(0.0);
    let cleanliness = round(
        20.0 - 5.0 * (t.missed_sets + t.missed_spikes) as f64
            - 2.0 * (t.tough_touches + t.aced) as f64,
    );

    PlayerStats {
        total: hitting + defense + serving + cleanliness,
        hitting,
        defense,
        serving,
        cleanliness,
    }
}

/// Stats for all four players, indexed by slot.
pub fn game_stats(game: &Game) -> [PlayerStats; 4] {
    Slot::ALL.map(|slot| player_stats(game, slot))
}
