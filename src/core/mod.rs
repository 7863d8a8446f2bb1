//! Core value types: cards, colors, players, actions, RNG, and game state.
//!
//! Everything here is a plain immutable value; the rules in [`crate::rules`]
//! are the only code that advances a `GameState`.

pub mod action;
pub mod card;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use card::{standard_deck, Card, Color, ColorMap, InvalidCard, DECK_SIZE};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use state::{Expedition, GameState, InvalidExpedition, Phase, Pile, Player, HAND_SIZE};
