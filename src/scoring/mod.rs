//! Expedition scoring and game-result aggregation.
//!
//! Each of a player's six expeditions scores independently:
//!
//! - empty: 0 (no entry cost, no bonus);
//! - otherwise `base = number sum - 20`, multiplied by
//!   `1 + handshake count`, plus a flat +20 when the expedition holds
//!   8 or more number cards (bonus applies after multiplication).
//!
//! A player's total is the sum of the six expedition totals; the strictly
//! higher total wins, equal totals tie. Scoring is only valid once the game
//! is over.

use serde::{Deserialize, Serialize};

use crate::core::card::ColorMap;
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::state::{Expedition, GameState, Player};
use crate::rules::RuleError;

/// Fixed entry cost of starting an expedition.
pub const EXPEDITION_COST: i32 = 20;

/// Number cards required for the flat bonus.
pub const BONUS_THRESHOLD: usize = 8;

/// Flat bonus awarded after multiplication.
pub const BONUS_POINTS: i32 = 20;

/// Score breakdown for a single expedition.
///
/// `total = base * multiplier + bonus`. An empty expedition is all zeros
/// with multiplier 1, so its total is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionScore {
    /// Number-card sum minus the entry cost; 0 for an empty expedition.
    pub base: i32,
    /// 1 plus the handshake count.
    pub multiplier: i32,
    /// Flat bonus for 8+ number cards, applied after multiplication.
    pub bonus: i32,
}

impl Default for ExpeditionScore {
    fn default() -> Self {
        Self {
            base: 0,
            multiplier: 1,
            bonus: 0,
        }
    }
}

impl ExpeditionScore {
    /// The expedition's final score.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.base * self.multiplier + self.bonus
    }
}

/// One player's six expedition scores and their sum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub expeditions: ColorMap<ExpeditionScore>,
    pub total: i32,
}

/// Verdict of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher total.
    Winner(PlayerId),
    /// Equal totals.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie)
    }
}

/// Both players' breakdowns and the verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub players: PlayerPair<PlayerScore>,
    pub result: GameResult,
}

/// Score a single expedition.
#[must_use]
pub fn score_expedition(expedition: &Expedition) -> ExpeditionScore {
    if expedition.is_empty() {
        return ExpeditionScore::default();
    }

    let base = expedition.number_sum() - EXPEDITION_COST;
    let multiplier = 1 + expedition.handshake_count() as i32;
    let bonus = if expedition.number_count() >= BONUS_THRESHOLD {
        BONUS_POINTS
    } else {
        0
    };

    ExpeditionScore {
        base,
        multiplier,
        bonus,
    }
}

/// Score all six of a player's expeditions.
#[must_use]
pub fn score_player(player: &Player) -> PlayerScore {
    let expeditions = ColorMap::new(|color| score_expedition(player.expedition(color)));
    let total = expeditions.values().map(ExpeditionScore::total).sum();

    PlayerScore { expeditions, total }
}

/// Score a finished game.
///
/// Rejected with [`RuleError::GameInProgress`] before the terminal state.
/// Idempotent: scoring the same state twice yields identical results.
pub fn score_game(state: &GameState) -> Result<Scoreboard, RuleError> {
    if !state.is_over() {
        return Err(RuleError::GameInProgress);
    }

    let players = PlayerPair::new(|p| score_player(state.player(p)));
    let totals = PlayerPair::new(|p| players[p].total);

    let result = match totals[PlayerId::new(0)].cmp(&totals[PlayerId::new(1)]) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
        std::cmp::Ordering::Equal => GameResult::Tie,
    };

    Ok(Scoreboard { players, result })
}
