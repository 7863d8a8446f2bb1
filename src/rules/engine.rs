//! Move validation and application: the game's state machine.
//!
//! Transitions, each triggered by one external action:
//!
//! - `Play` phase: [`Action::Play`] or [`Action::Discard`] moves one card out
//!   of the current player's hand and advances to `Draw` for the same player.
//! - `Draw` phase: [`Action::DrawDeck`] or [`Action::DrawDiscard`] puts one
//!   card into the hand and passes the turn, except that the draw emptying
//!   the deck ends the game on the spot.
//! - `GameOver` accepts nothing.
//!
//! The engine is pure: [`GameState::apply`] validates against `&self`, then
//! clones and edits the clone, so a rejected action cannot leave partial
//! mutation behind and old snapshots stay valid forever.

use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase};

use super::error::RuleError;

impl GameState {
    /// Check an action's legality without applying it.
    ///
    /// `Ok(())` means [`GameState::apply`] with the same inputs will succeed.
    pub fn validate(&self, player: PlayerId, action: &Action) -> Result<(), RuleError> {
        if self.phase == Phase::GameOver {
            return Err(RuleError::GameAlreadyOver);
        }
        if player != self.current {
            return Err(RuleError::NotPlayersTurn);
        }

        match *action {
            Action::Play { card, expedition } => {
                if self.phase != Phase::Play {
                    return Err(RuleError::WrongPhase);
                }
                if !self.players[player].has_card(card) {
                    return Err(RuleError::CardNotInHand);
                }
                if card.color() != expedition {
                    return Err(RuleError::ColorMismatch);
                }
                if !self.players[player].expedition(expedition).can_accept(card) {
                    return Err(RuleError::InvalidExpeditionMove);
                }
            }
            Action::Discard { card, pile } => {
                if self.phase != Phase::Play {
                    return Err(RuleError::WrongPhase);
                }
                if !self.players[player].has_card(card) {
                    return Err(RuleError::CardNotInHand);
                }
                if card.color() != pile {
                    return Err(RuleError::ColorMismatch);
                }
            }
            Action::DrawDeck => {
                if self.phase != Phase::Draw {
                    return Err(RuleError::WrongPhase);
                }
                if self.deck.is_empty() {
                    return Err(RuleError::EmptySource);
                }
            }
            Action::DrawDiscard { pile } => {
                if self.phase != Phase::Draw {
                    return Err(RuleError::WrongPhase);
                }
                if self.discards[pile].is_empty() {
                    return Err(RuleError::EmptySource);
                }
                if self.just_discarded == Some(pile) {
                    return Err(RuleError::DrewOwnDiscard);
                }
            }
        }

        Ok(())
    }

    /// Apply an action, producing the next state.
    ///
    /// The input state is never mutated; on error it is returned untouched
    /// in the sense that no new state exists at all.
    pub fn apply(&self, player: PlayerId, action: &Action) -> Result<GameState, RuleError> {
        self.validate(player, action)?;

        let mut next = self.clone();
        match *action {
            Action::Play { card, expedition } => {
                next.players[player].remove_from_hand(card);
                next.players[player].expedition_mut(expedition).push(card);
                next.phase = Phase::Draw;
                next.just_discarded = None;
            }
            Action::Discard { card, pile } => {
                next.players[player].remove_from_hand(card);
                next.discards[pile].push(card);
                next.phase = Phase::Draw;
                next.just_discarded = Some(pile);
            }
            Action::DrawDeck => {
                let card = next.deck.pop_back().expect("validated: deck is non-empty");
                next.players[player].add_to_hand(card);
                next.just_discarded = None;
                if next.deck.is_empty() {
                    // The draw that empties the deck ends the game; the card
                    // still enters the hand.
                    next.phase = Phase::GameOver;
                } else {
                    next.phase = Phase::Play;
                    next.current = player.other();
                }
            }
            Action::DrawDiscard { pile } => {
                let card = next.discards[pile]
                    .pop()
                    .expect("validated: pile is non-empty");
                next.players[player].add_to_hand(card);
                next.just_discarded = None;
                next.phase = Phase::Play;
                next.current = player.other();
            }
        }

        debug_assert_eq!(next.card_count(), self.card_count());
        Ok(next)
    }

    /// Enumerate every action [`GameState::validate`] would accept for a
    /// player.
    ///
    /// Empty when the player cannot act (not their turn, or game over).
    /// Duplicate hand cards yield one action, not three.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.phase == Phase::GameOver || player != self.current {
            return vec![];
        }

        let mut actions = Vec::new();
        let push_unique = |actions: &mut Vec<Action>, action: Action| {
            if !actions.contains(&action) {
                actions.push(action);
            }
        };

        match self.phase {
            Phase::Play => {
                for &card in self.players[player].hand() {
                    if self.players[player].expedition(card.color()).can_accept(card) {
                        push_unique(&mut actions, Action::play(card));
                    }
                    push_unique(&mut actions, Action::discard(card));
                }
            }
            Phase::Draw => {
                if !self.deck.is_empty() {
                    actions.push(Action::DrawDeck);
                }
                for (color, pile) in self.discards.iter() {
                    if !pile.is_empty() && self.just_discarded != Some(color) {
                        actions.push(Action::DrawDiscard { pile: color });
                    }
                }
            }
            Phase::GameOver => unreachable!("handled above"),
        }

        actions
    }
}
