//! Card identification.
//!
//! Every card placed into a duel gets a unique `EntityId`, allocated by the
//! `GameState` in creation order. Players are addressed separately through
//! `PlayerId`; an entity ID always refers to a card.
//!
//! ```
//! use duckdog_duel::core::EntityId;
//!
//! let first = EntityId::FIRST;
//! assert_eq!(first.next(), EntityId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The first ID handed out by a fresh game state.
    pub const FIRST: Self = Self(0);

    /// The ID allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
