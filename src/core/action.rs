//! The action vocabulary: everything a player can submit to the engine.
//!
//! A turn is one `Play` phase action (`Play` or `Discard`) followed by one
//! `Draw` phase action (`DrawDeck` or `DrawDiscard`). Actions are plain
//! values; the rules engine interprets and validates them.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color};

/// A single proposed move.
///
/// Play and discard actions name their target color explicitly, mirroring
/// the board layout: the engine rejects a target that does not match the
/// card's color rather than silently correcting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Commit a card from hand to the expedition of the given color.
    Play { card: Card, expedition: Color },
    /// Move a card from hand onto the discard pile of the given color.
    Discard { card: Card, pile: Color },
    /// Draw the top card of the deck.
    DrawDeck,
    /// Draw the top card of the given color's discard pile.
    DrawDiscard { pile: Color },
}

impl Action {
    /// Play a card onto its own color's expedition.
    #[must_use]
    pub const fn play(card: Card) -> Self {
        Action::Play {
            card,
            expedition: card.color(),
        }
    }

    /// Discard a card onto its own color's pile.
    #[must_use]
    pub const fn discard(card: Card) -> Self {
        Action::Discard {
            card,
            pile: card.color(),
        }
    }

    /// Check if this is a `Play`-phase action (play or discard).
    #[must_use]
    pub const fn is_play_phase(&self) -> bool {
        matches!(self, Action::Play { .. } | Action::Discard { .. })
    }

    /// Check if this is a `Draw`-phase action.
    #[must_use]
    pub const fn is_draw_phase(&self) -> bool {
        !self.is_play_phase()
    }
}
