//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel always has exactly two seats: the sheriff (seat 0, bottom) and
//! the bandit (seat 1, top). `PlayerId::opponent` flips between them.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a duel.
pub const SEATS: usize = 2;

/// Player identifier (seat 0 or seat 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The bottom player, who moves first.
    pub const SHERIFF: Self = Self(0);

    /// The top player.
    pub const BANDIT: Self = Self(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < SEATS, "A duel has exactly two seats");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player sitting across the table.
    ///
    /// ```
    /// use duckdog_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::SHERIFF.opponent(), PlayerId::BANDIT);
    /// assert_eq!(PlayerId::BANDIT.opponent(), PlayerId::SHERIFF);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::SHERIFF, Self::BANDIT].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::SHERIFF => write!(f, "Sheriff"),
            _ => write!(f, "Bandit"),
        }
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use duckdog_duel::core::{PlayerId, PlayerMap};
///
/// let mut power: PlayerMap<i64> = PlayerMap::with_value(10);
/// power[PlayerId::BANDIT] -= 3;
///
/// assert_eq!(power[PlayerId::SHERIFF], 10);
/// assert_eq!(power[PlayerId::BANDIT], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::SHERIFF), factory(PlayerId::BANDIT)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
