//! Player identification and exactly-two-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player index for a two-player game: 0 or 1.
//!
//! ## PlayerPair
//!
//! Per-player data storage backed by a fixed `[T; 2]`, indexable by
//! `PlayerId`. Both seats always exist.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier: 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Number of players.
    pub const COUNT: usize = 2;

    /// Both player IDs in seat order.
    pub const BOTH: [PlayerId; 2] = [PlayerId(0), PlayerId(1)];

    /// Create a player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Player index must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Exactly-two per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use lost_cities::core::{PlayerId, PlayerPair};
///
/// let mut totals: PlayerPair<i32> = PlayerPair::new(|_| 0);
/// totals[PlayerId::new(1)] = 54;
/// assert_eq!(totals[PlayerId::new(0)], 0);
/// assert_eq!(totals[PlayerId::new(1)], 54);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PlayerId::COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a new PlayerPair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a new PlayerPair from two values in seat order.
    #[must_use]
    pub fn from_parts(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::BOTH.iter().copied().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
