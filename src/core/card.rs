//! Cards, colors, and the standard deck.
//!
//! ## Card values
//!
//! A card is either a handshake (value 0, a score multiplier that must be
//! played before any number card of its color) or a number card with value
//! 2..=10. There is no value 1. The standard deck holds, per color, three
//! handshakes plus one each of 2..=10: 12 cards x 6 colors = 72 total.
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a fixed `[T; 6]`. Every color always has
//! an entry; partially populated maps cannot be constructed.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// The six expedition colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Purple,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = 6;

    /// All colors in canonical order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::White,
        Color::Purple,
    ];

    /// Get the raw color index (0-based, canonical order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::White => "WHITE",
            Color::Purple => "PURPLE",
        };
        write!(f, "{name}")
    }
}

/// Per-color data storage with O(1) access.
///
/// Backed by a `[T; 6]` with one entry per color, so every color is always
/// present by construction.
///
/// ## Example
///
/// ```
/// use lost_cities::core::{Color, ColorMap};
///
/// let mut scores: ColorMap<i32> = ColorMap::with_value(0);
/// scores[Color::Red] = -28;
/// assert_eq!(scores[Color::Red], -28);
/// assert_eq!(scores[Color::Blue], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; Color::COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.iter().copied().zip(self.data.iter())
    }

    /// Iterate over values in canonical color order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// Value of a handshake (multiplier) card.
pub const HANDSHAKE_VALUE: u8 = 0;

/// Smallest number-card value. There is no value 1.
pub const MIN_NUMBER_VALUE: u8 = 2;

/// Largest number-card value.
pub const MAX_NUMBER_VALUE: u8 = 10;

/// A card value outside 0 and 2..=10.
///
/// Construction-time error in the data layer; gameplay never produces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid card value {value} (expected 0 or 2..=10)")]
pub struct InvalidCard {
    pub value: u8,
}

/// A single card: one of six colors, value 0 (handshake) or 2..=10.
///
/// Cards are immutable `Copy` values with structural identity; the deck holds
/// duplicate handshakes, so identity does not imply uniqueness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    color: Color,
    value: u8,
}

impl Card {
    /// Create a card, rejecting values outside 0 and 2..=10.
    pub fn new(color: Color, value: u8) -> Result<Self, InvalidCard> {
        match value {
            HANDSHAKE_VALUE | MIN_NUMBER_VALUE..=MAX_NUMBER_VALUE => Ok(Self { color, value }),
            _ => Err(InvalidCard { value }),
        }
    }

    /// Create a handshake (multiplier) card.
    #[must_use]
    pub const fn handshake(color: Color) -> Self {
        Self {
            color,
            value: HANDSHAKE_VALUE,
        }
    }

    /// Create a number card (value 2..=10).
    pub fn number(color: Color, value: u8) -> Result<Self, InvalidCard> {
        if (MIN_NUMBER_VALUE..=MAX_NUMBER_VALUE).contains(&value) {
            Ok(Self { color, value })
        } else {
            Err(InvalidCard { value })
        }
    }

    /// The card's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The card's value: 0 for handshakes, 2..=10 for number cards.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Check if this is a handshake (multiplier) card.
    #[must_use]
    pub const fn is_handshake(self) -> bool {
        self.value == HANDSHAKE_VALUE
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_handshake() {
            write!(f, "{} handshake", self.color)
        } else {
            write!(f, "{} {}", self.color, self.value)
        }
    }
}

/// Number of cards in the standard deck.
pub const DECK_SIZE: usize = 72;

/// Build the standard 72-card deck in canonical (unshuffled) order.
///
/// Per color: 3 handshakes, then one each of 2..=10.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for _ in 0..3 {
            deck.push(Card::handshake(color));
        }
        for value in MIN_NUMBER_VALUE..=MAX_NUMBER_VALUE {
            deck.push(Card { color, value });
        }
    }
    deck
}
