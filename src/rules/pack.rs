//! Pack counting.
//!
//! Species marked as counted keep a shared counter of their live in-play
//! instances. Pack hooks read the counter whenever damage passes through
//! them and turn it into a triangular bonus: one Lad adds 1, two add 3,
//! three add 6.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::SpeciesId;

/// Triangular bonus for a pack of `count` cards: `n * (n + 1) / 2`.
///
/// ```
/// use duckdog_duel::rules::pack::triangular_bonus;
///
/// assert_eq!(triangular_bonus(0), 0);
/// assert_eq!(triangular_bonus(1), 1);
/// assert_eq!(triangular_bonus(3), 6);
/// ```
#[must_use]
pub fn triangular_bonus(count: u32) -> i64 {
    let n = i64::from(count);
    n * (n + 1) / 2
}

/// Live in-play counts per counted species.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedCounters {
    counts: FxHashMap<SpeciesId, u32>,
}

impl SharedCounters {
    /// Create empty counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for a species. Unseen species count zero.
    #[must_use]
    pub fn get(&self, species: SpeciesId) -> u32 {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Add one live instance. Returns the new count.
    pub fn increment(&mut self, species: SpeciesId) -> u32 {
        let count = self.counts.entry(species).or_insert(0);
        *count += 1;
        tracing::trace!(%species, count = *count, "pack grew");
        *count
    }

    /// Remove one live instance, never going below zero. Returns the new count.
    pub fn decrement(&mut self, species: SpeciesId) -> u32 {
        let count = self.counts.entry(species).or_insert(0);
        if *count == 0 {
            tracing::warn!(%species, "pack counter already at zero");
        } else {
            *count -= 1;
        }
        tracing::trace!(%species, count = *count, "pack shrank");
        *count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LAD: SpeciesId = SpeciesId::new(5);

    #[test]
    fn test_bonus_values() {
        assert_eq!(triangular_bonus(0), 0);
        assert_eq!(triangular_bonus(1), 1);
        assert_eq!(triangular_bonus(2), 3);
        assert_eq!(triangular_bonus(3), 6);
    }

    #[test]
    fn test_counter_up_and_down() {
        let mut counters = SharedCounters::new();
        assert_eq!(counters.get(LAD), 0);

        assert_eq!(counters.increment(LAD), 1);
        assert_eq!(counters.increment(LAD), 2);
        assert_eq!(counters.decrement(LAD), 1);
        assert_eq!(counters.get(LAD), 1);
        assert_eq!(counters.get(SpeciesId::new(6)), 0);
    }

    #[test]
    fn test_decrement_saturates() {
        let mut counters = SharedCounters::new();
        assert_eq!(counters.decrement(LAD), 0);
        assert_eq!(counters.increment(LAD), 1);
    }

    proptest! {
        #[test]
        fn bonus_grows_by_new_count(n in 0u32..10_000) {
            prop_assert_eq!(triangular_bonus(n + 1) - triangular_bonus(n), i64::from(n) + 1);
        }
    }
}
