//! # lost-cities
//!
//! Rules and scoring engine for a two-player "Lost Cities"-style card game,
//! built to serve as the environment side of an RL training setup.
//!
//! ## Design Principles
//!
//! 1. **Pure and immutable**: the engine never mutates an input state.
//!    [`GameState::apply`] returns a new state or a [`RuleError`]; callers
//!    can hold old snapshots indefinitely.
//!
//! 2. **Deterministic**: the only randomness is the initial shuffle, driven
//!    by a seeded, forkable [`GameRng`]. Same seed, same game.
//!
//! 3. **Cheap snapshots**: deck, piles, and expeditions use `im-rs`
//!    persistent structures, so cloning a state per action stays O(1)-ish.
//!
//! 4. **Everything rejected, nothing fatal**: every gameplay input is either
//!    accepted or cleanly refused with an error kind; malformed cards are a
//!    construction-time error in the data layer, not a gameplay error.
//!
//! ## Modules
//!
//! - `core`: cards, colors, players, actions, RNG, game state
//! - `rules`: move validation and application (the state machine)
//! - `scoring`: expedition scores, player totals, winner/tie verdict
//!
//! ## Example
//!
//! ```
//! use lost_cities::{Action, GameState};
//!
//! let state = GameState::new(42);
//! let player = state.current_player();
//!
//! // Discard the first card in hand, then draw from the deck.
//! let card = state.player(player).hand()[0];
//! let state = state.apply(player, &Action::discard(card)).unwrap();
//! let state = state.apply(player, &Action::DrawDeck).unwrap();
//!
//! assert_eq!(state.current_player(), player.other());
//! ```

pub mod core;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Action, Card, Color, ColorMap, Expedition, GameRng, GameRngState, GameState,
    InvalidCard, InvalidExpedition, Phase, Pile, Player, PlayerId, PlayerPair, DECK_SIZE,
    HAND_SIZE,
};

pub use crate::rules::RuleError;

pub use crate::scoring::{
    score_expedition, score_game, score_player, ExpeditionScore, GameResult, PlayerScore,
    Scoreboard,
};
