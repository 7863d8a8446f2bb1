//! Game state: piles, expeditions, players, and the full `GameState`.
//!
//! ## Immutability
//!
//! `GameState` is the single root of truth and is never mutated in place by
//! the engine: applying an action clones the state and edits the clone. Deck,
//! discard piles, and expeditions use `im::Vector`, so clones share structure
//! and stay cheap; callers can hold as many old snapshots as they like.
//!
//! ## Invariants
//!
//! At every reachable state:
//! - hands + expeditions + deck + discard piles hold exactly 72 cards;
//! - each expedition's number values strictly increase in play order and no
//!   handshake follows a number card;
//! - the current player only changes at the completed play+draw boundary;
//! - `GameOver` is terminal.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::card::{standard_deck, Card, Color, ColorMap};
use super::player::{PlayerId, PlayerPair};
use super::rng::GameRng;

/// Cards dealt to each player at game start.
pub const HAND_SIZE: usize = 8;

/// A LIFO stack of cards; used for each color's discard pile.
///
/// Only the top card is visible and drawable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a card onto the top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom-to-top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A card sequence violating the expedition invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("card {card} breaks the handshake-then-ascending order")]
pub struct InvalidExpedition {
    pub card: Card,
}

/// The ordered cards a player has committed to one color.
///
/// Handshakes (if any) all precede the first number card, and number values
/// strictly increase in play order. The engine preserves the invariant on
/// every play; `from_cards` enforces it for reconstructed states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    cards: Vector<Card>,
}

impl Expedition {
    /// Create an empty expedition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an expedition from cards in play order, validating the
    /// handshake-then-ascending invariant.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, InvalidExpedition> {
        let mut expedition = Self::new();
        for card in cards {
            if !expedition.can_accept(card) {
                return Err(InvalidExpedition { card });
            }
            expedition.cards.push_back(card);
        }
        Ok(expedition)
    }

    /// Check whether appending `card` preserves the invariant.
    ///
    /// Color agreement is the caller's concern; expeditions only order values.
    #[must_use]
    pub fn can_accept(&self, card: Card) -> bool {
        match (card.is_handshake(), self.top_number()) {
            (true, top) => top.is_none(),
            (false, Some(top)) => card.value() > top,
            (false, None) => true,
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.can_accept(card));
        self.cards.push_back(card);
    }

    /// Value of the highest (most recent) number card, if any.
    #[must_use]
    pub fn top_number(&self) -> Option<u8> {
        self.cards
            .iter()
            .rev()
            .find(|c| !c.is_handshake())
            .map(|c| c.value())
    }

    /// Number of handshake cards.
    #[must_use]
    pub fn handshake_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_handshake()).count()
    }

    /// Number of number cards.
    #[must_use]
    pub fn number_count(&self) -> usize {
        self.cards.len() - self.handshake_count()
    }

    /// Sum of number-card values.
    #[must_use]
    pub fn number_sum(&self) -> i32 {
        self.cards
            .iter()
            .filter(|c| !c.is_handshake())
            .map(|c| i32::from(c.value()))
            .sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// One player's private hand and six expedition boards.
///
/// The player does not own the deck or the discard piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unordered bag, conventionally 8 cards at turn start.
    /// Inline storage: the hand never exceeds 8 cards.
    hand: SmallVec<[Card; HAND_SIZE]>,
    expeditions: ColorMap<Expedition>,
}

impl Player {
    /// Create a player with an empty hand and empty expeditions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player with the given hand and empty expeditions.
    #[must_use]
    pub fn with_hand(hand: impl IntoIterator<Item = Card>) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            expeditions: ColorMap::default(),
        }
    }

    /// Create a player from a hand and six expedition boards.
    #[must_use]
    pub fn from_parts(
        hand: impl IntoIterator<Item = Card>,
        expeditions: ColorMap<Expedition>,
    ) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            expeditions,
        }
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Check if the hand contains a card.
    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// The player's expedition for a color.
    #[must_use]
    pub fn expedition(&self, color: Color) -> &Expedition {
        &self.expeditions[color]
    }

    /// All six expeditions.
    #[must_use]
    pub fn expeditions(&self) -> &ColorMap<Expedition> {
        &self.expeditions
    }

    pub(crate) fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove one copy of `card` from the hand. Returns false if absent.
    pub(crate) fn remove_from_hand(&mut self, card: Card) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn expedition_mut(&mut self, color: Color) -> &mut Expedition {
        &mut self.expeditions[color]
    }

    /// Total cards held in hand and expeditions.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.expeditions.values().map(Expedition::len).sum::<usize>()
    }
}

/// Sub-turn phase a player must complete in order each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must play or discard one card.
    Play,
    /// The same player must draw one card.
    Draw,
    /// Terminal: no further actions are accepted.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Play => "PLAY",
            Phase::Draw => "DRAW",
            Phase::GameOver => "GAME_OVER",
        };
        write!(f, "{name}")
    }
}

/// Complete state of a game: the single root of truth.
///
/// Constructed once at game start via [`GameState::new`], then threaded
/// explicitly through every engine call; each accepted action produces a new
/// value. See [`crate::rules`] for validation and application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: PlayerPair<Player>,
    pub(crate) current: PlayerId,
    pub(crate) phase: Phase,
    /// Remaining face-down cards; the top of the deck is the back.
    pub(crate) deck: Vector<Card>,
    pub(crate) discards: ColorMap<Pile>,
    /// Pile discarded to during this turn's `Play` action, if any.
    /// Drawing from it this same turn is barred.
    pub(crate) just_discarded: Option<Color>,
}

impl GameState {
    /// Start a new game: shuffle the 72-card deck with the seeded RNG and
    /// deal 8 cards to each player, alternating from the top.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut GameRng::new(seed))
    }

    /// Start a new game using an existing RNG (e.g. a fork of a training
    /// harness's root RNG).
    #[must_use]
    pub fn with_rng(rng: &mut GameRng) -> Self {
        let mut deck = standard_deck();
        rng.shuffle(&mut deck);

        let mut deck: Vector<Card> = deck.into_iter().collect();
        let mut players: PlayerPair<Player> = PlayerPair::default();
        for _ in 0..HAND_SIZE {
            for player in PlayerId::BOTH {
                let card = deck.pop_back().expect("a fresh 72-card deck covers the deal");
                players[player].add_to_hand(card);
            }
        }

        Self {
            players,
            current: PlayerId::new(0),
            phase: Phase::Play,
            deck,
            discards: ColorMap::default(),
            just_discarded: None,
        }
    }

    /// Reconstruct a state from its parts (persistence layer, tests).
    ///
    /// The deck is given bottom-to-top. Parts are trusted: conservation is a
    /// property of states reachable from [`GameState::new`], not a
    /// construction-time check.
    #[must_use]
    pub fn from_parts(
        players: PlayerPair<Player>,
        current: PlayerId,
        phase: Phase,
        deck: impl IntoIterator<Item = Card>,
        discards: ColorMap<Pile>,
    ) -> Self {
        Self {
            players,
            current,
            phase,
            deck: deck.into_iter().collect(),
            discards,
            just_discarded: None,
        }
    }

    /// A player's view-independent data.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Cards remaining in the face-down deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// A color's discard pile.
    #[must_use]
    pub fn discard_pile(&self, color: Color) -> &Pile {
        &self.discards[color]
    }

    /// The pile the current player discarded to this turn, if any.
    #[must_use]
    pub fn just_discarded(&self) -> Option<Color> {
        self.just_discarded
    }

    /// Total cards across hands, expeditions, deck, and discard piles.
    ///
    /// Always 72 for reachable states (conservation invariant).
    #[must_use]
    pub fn card_count(&self) -> usize {
        let held: usize = self.players.iter().map(|(_, p)| p.card_count()).sum();
        let discarded: usize = self.discards.values().map(Pile::len).sum();
        held + discarded + self.deck.len()
    }

    /// Multiset of every card in the state, for conservation checks.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut census: FxHashMap<Card, usize> = FxHashMap::default();
        let mut count = |card: &Card| *census.entry(*card).or_insert(0) += 1;

        for card in &self.deck {
            count(card);
        }
        for (_, pile) in self.discards.iter() {
            pile.iter().for_each(&mut count);
        }
        for (_, player) in self.players.iter() {
            player.hand.iter().for_each(&mut count);
            for (_, expedition) in player.expeditions.iter() {
                expedition.iter().for_each(&mut count);
            }
        }
        census
    }

    /// Serialize a snapshot for the persistence collaborator.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
