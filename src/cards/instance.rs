//! Card instances - runtime card state.
//!
//! `CardInstance` is one concrete card in a duel. It tracks the mutable
//! state the rules touch: current power, whether the card is in play, and
//! the instance-level hook overrides installed by ability theft.
//!
//! Overrides shadow the species-level hooks for this one card only.

use serde::{Deserialize, Serialize};

use super::definition::{SpeciesDefinition, SpeciesId};
use super::hooks::HookTable;
use crate::core::{EntityId, PlayerId};

/// A card in a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Concrete species of the card.
    pub species: SpeciesId,

    /// Display name.
    pub name: String,

    /// Player whose board holds the card.
    pub owner: PlayerId,

    /// Current power, `0..=max_power`.
    power: i64,

    /// Power cap, fixed at creation.
    max_power: i64,

    /// Between enter-play and leave-play.
    pub in_play: bool,

    /// Instance-level hook overrides.
    #[serde(default)]
    pub overrides: HookTable,
}

impl CardInstance {
    /// Create a card at full power with no overrides.
    #[must_use]
    pub fn new(
        entity_id: EntityId,
        species: SpeciesId,
        owner: PlayerId,
        name: impl Into<String>,
        max_power: i64,
    ) -> Self {
        let max_power = max_power.max(0);
        Self {
            entity_id,
            species,
            name: name.into(),
            owner,
            power: max_power,
            max_power,
            in_play: false,
            overrides: HookTable::new(),
        }
    }

    /// Create a card with its species' default name and power.
    #[must_use]
    pub fn of_species(entity_id: EntityId, species: &SpeciesDefinition, owner: PlayerId) -> Self {
        Self::new(entity_id, species.id, owner, species.card_name.clone(), species.max_power)
    }

    /// Current power.
    #[must_use]
    pub fn power(&self) -> i64 {
        self.power
    }

    /// Power cap.
    #[must_use]
    pub fn max_power(&self) -> i64 {
        self.max_power
    }

    /// Check if the card has been reduced to zero power.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.power == 0
    }

    /// Lose `amount` power, floored at zero. Returns the power actually lost.
    pub fn wound(&mut self, amount: i64) -> i64 {
        let before = self.power;
        self.power = (self.power - amount.max(0)).max(0);
        before - self.power
    }

    /// Set power, clamped to `0..=max_power`.
    pub fn set_power(&mut self, power: i64) {
        self.power = power.clamp(0, self.max_power);
    }
}
