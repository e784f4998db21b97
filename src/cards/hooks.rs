//! Damage-modifying hooks as data.
//!
//! Three hooks can change a damage value on its way through a card:
//!
//! - `DealtToCreature`: outgoing damage aimed at another card
//! - `DealtToPlayer`: outgoing damage aimed at the opposing hero
//! - `Taken`: incoming damage
//!
//! An implementation is a `DamageModifier` value rather than a closure, so
//! it can be copied from one table to another (ability theft), serialized,
//! and compared in tests. `HookTable` holds at most one modifier per hook
//! and is used both for species-level tables and per-instance overrides.

use serde::{Deserialize, Serialize};

use super::definition::SpeciesId;
use crate::core::EntityId;
use crate::effects::{Cue, Hooked};
use crate::rules::pack::{triangular_bonus, SharedCounters};

/// Name of a damage-modifying hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageHook {
    /// Outgoing damage to a creature.
    DealtToCreature,
    /// Outgoing damage to a hero.
    DealtToPlayer,
    /// Incoming damage.
    Taken,
}

impl DamageHook {
    /// All hooks, in the order the theft resolver visits them.
    pub const ALL: [DamageHook; 3] = [
        DamageHook::DealtToCreature,
        DamageHook::DealtToPlayer,
        DamageHook::Taken,
    ];
}

impl std::fmt::Display for DamageHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DamageHook::DealtToCreature => "modify-dealt-damage-to-creature",
            DamageHook::DealtToPlayer => "modify-dealt-damage-to-player",
            DamageHook::Taken => "modify-taken-damage",
        };
        f.write_str(name)
    }
}

/// A damage hook implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageModifier {
    /// Add the triangular bonus of `pack`'s shared counter.
    PackBonus {
        /// Species whose counter feeds the bonus.
        pack: SpeciesId,
    },

    /// Subtract the triangular bonus of `pack`'s shared counter, floored at zero.
    PackGuard {
        /// Species whose counter feeds the bonus.
        pack: SpeciesId,
    },

    /// Signal the ability, then subtract a flat amount.
    Armor {
        /// Amount removed from every hit.
        reduction: i64,
    },
}

impl DamageModifier {
    /// Run the modifier for the card `holder` on `value`.
    ///
    /// The counter is read at call time, so a bonus reflects the pack size
    /// at the moment the damage passes through.
    #[must_use]
    pub fn apply(&self, value: i64, holder: EntityId, counters: &SharedCounters) -> Hooked<i64> {
        match *self {
            DamageModifier::PackBonus { pack } => {
                Hooked::new(value + triangular_bonus(counters.get(pack)))
            }
            DamageModifier::PackGuard { pack } => {
                Hooked::new((value - triangular_bonus(counters.get(pack))).max(0))
            }
            DamageModifier::Armor { reduction } => {
                Hooked::new(value - reduction).with_cue(Cue::SignalAbility(holder))
            }
        }
    }
}

/// At most one modifier per damage hook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookTable {
    dealt_to_creature: Option<DamageModifier>,
    dealt_to_player: Option<DamageModifier>,
    taken: Option<DamageModifier>,
}

impl HookTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hook (builder pattern).
    #[must_use]
    pub fn with(mut self, hook: DamageHook, modifier: DamageModifier) -> Self {
        self.set(hook, modifier);
        self
    }

    /// Get the modifier installed for a hook.
    #[must_use]
    pub fn get(&self, hook: DamageHook) -> Option<DamageModifier> {
        *self.slot(hook)
    }

    /// Check whether a hook is installed.
    #[must_use]
    pub fn has(&self, hook: DamageHook) -> bool {
        self.slot(hook).is_some()
    }

    /// Install a modifier, returning the one it replaced.
    pub fn set(&mut self, hook: DamageHook, modifier: DamageModifier) -> Option<DamageModifier> {
        self.slot_mut(hook).replace(modifier)
    }

    /// Remove a hook, returning its modifier.
    pub fn remove(&mut self, hook: DamageHook) -> Option<DamageModifier> {
        self.slot_mut(hook).take()
    }

    /// Check if no hook is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DamageHook::ALL.iter().all(|&hook| !self.has(hook))
    }

    fn slot(&self, hook: DamageHook) -> &Option<DamageModifier> {
        match hook {
            DamageHook::DealtToCreature => &self.dealt_to_creature,
            DamageHook::DealtToPlayer => &self.dealt_to_player,
            DamageHook::Taken => &self.taken,
        }
    }

    fn slot_mut(&mut self, hook: DamageHook) -> &mut Option<DamageModifier> {
        match hook {
            DamageHook::DealtToCreature => &mut self.dealt_to_creature,
            DamageHook::DealtToPlayer => &mut self.dealt_to_player,
            DamageHook::Taken => &mut self.taken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACK: SpeciesId = SpeciesId::new(4);

    #[test]
    fn test_table_set_get_remove() {
        let mut table = HookTable::new();
        assert!(table.is_empty());

        table.set(DamageHook::Taken, DamageModifier::Armor { reduction: 1 });
        assert!(table.has(DamageHook::Taken));
        assert!(!table.has(DamageHook::DealtToPlayer));

        assert_eq!(
            table.remove(DamageHook::Taken),
            Some(DamageModifier::Armor { reduction: 1 })
        );
        assert!(table.is_empty());
        assert_eq!(table.remove(DamageHook::Taken), None);
    }

    #[test]
    fn test_table_builder() {
        let table = HookTable::new()
            .with(DamageHook::Taken, DamageModifier::PackGuard { pack: PACK })
            .with(DamageHook::DealtToCreature, DamageModifier::PackBonus { pack: PACK });

        assert!(table.has(DamageHook::DealtToCreature));
        assert!(table.has(DamageHook::Taken));
        assert!(!table.has(DamageHook::DealtToPlayer));
    }

    #[test]
    fn test_pack_modifiers_read_counter() {
        let mut counters = SharedCounters::new();
        counters.increment(PACK);
        counters.increment(PACK);

        let bonus = DamageModifier::PackBonus { pack: PACK }.apply(2, EntityId(0), &counters);
        assert_eq!(bonus.value, 5);
        assert!(bonus.cues.is_empty());

        let guard = DamageModifier::PackGuard { pack: PACK }.apply(2, EntityId(0), &counters);
        assert_eq!(guard.value, 0);
    }

    #[test]
    fn test_armor_signals_holder() {
        let counters = SharedCounters::new();
        let hooked = DamageModifier::Armor { reduction: 1 }.apply(3, EntityId(9), &counters);

        assert_eq!(hooked.value, 2);
        assert_eq!(hooked.cues.as_slice(), &[Cue::SignalAbility(EntityId(9))]);
    }

    #[test]
    fn test_hook_names() {
        assert_eq!(DamageHook::Taken.to_string(), "modify-taken-damage");
    }
}
