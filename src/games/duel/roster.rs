//! Built-in species.

use crate::cards::{
    AttackStyle, DamageHook, DamageModifier, Lineage, PreAttack, SpeciesDefinition, SpeciesId,
    SpeciesRegistry, TraitText,
};
use crate::core::{DuelConfig, DuelError};

/// Species IDs of the built-in roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roster {
    /// Identity base.
    pub creature: SpeciesId,
    /// Duck-like creature.
    pub duck: SpeciesId,
    /// Dog-like base.
    pub dog: SpeciesId,
    /// Armored dog.
    pub trasher: SpeciesId,
    /// Pack dog.
    pub lad: SpeciesId,
    /// Hits every opposing card.
    pub gatling: SpeciesId,
    /// Steals abilities before attacking.
    pub rogue: SpeciesId,
}

impl Roster {
    /// Register the built-in species, with amounts taken from `config`.
    pub fn register(registry: &mut SpeciesRegistry, config: &DuelConfig) -> Result<Self, DuelError> {
        let creature = registry.register(SpeciesDefinition::new("Creature", "Creature", 1))?;

        let duck = registry.register(
            SpeciesDefinition::new("Duck", "Peaceful Duck", 2)
                .with_parent(creature)
                .with_lineage(Lineage::DUCK),
        )?;

        let dog = registry.register(
            SpeciesDefinition::new("Dog", "Bandit Dog", 3)
                .with_parent(creature)
                .with_lineage(Lineage::DOG),
        )?;

        let trasher = registry.register(
            SpeciesDefinition::new("Trasher", "Trasher", 5)
                .with_parent(dog)
                .with_hook(DamageHook::Taken, DamageModifier::Armor { reduction: config.armor })
                .with_trait(format!("Takes {} less damage", config.armor)),
        )?;

        // The pack hooks read the Lad's own counter.
        let pack = registry.next_id();
        let lad = registry.register(
            SpeciesDefinition::new("Lad", "Lad", 2)
                .with_parent(dog)
                .with_hook(DamageHook::DealtToCreature, DamageModifier::PackBonus { pack })
                .with_hook(DamageHook::Taken, DamageModifier::PackGuard { pack })
                .with_trait_text(TraitText::while_defining(
                    "The more of them, the stronger they are",
                    [DamageHook::DealtToCreature, DamageHook::Taken],
                ))
                .counted_in_play(),
        )?;
        debug_assert_eq!(pack, lad);

        let gatling = registry.register(
            SpeciesDefinition::new("Gatling", "Gatling", 6)
                .with_parent(creature)
                .with_attack(AttackStyle::Volley { damage: config.volley_damage })
                .with_trait(format!("Deals {} damage to every enemy card", config.volley_damage)),
        )?;

        let rogue = registry.register(
            SpeciesDefinition::new("Rogue", "Rogue", 2)
                .with_parent(creature)
                .with_before_attack(PreAttack::StealAbilities)
                .with_trait("Steals the abilities of its target's kind"),
        )?;

        Ok(Self {
            creature,
            duck,
            dog,
            trasher,
            lad,
            gatling,
            rogue,
        })
    }

    /// Every species of the roster, base first.
    #[must_use]
    pub fn all(&self) -> [SpeciesId; 7] {
        [
            self.creature,
            self.duck,
            self.dog,
            self.trasher,
            self.lad,
            self.gatling,
            self.rogue,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_registers_every_species() {
        let mut registry = SpeciesRegistry::new();
        let roster = Roster::register(&mut registry, &DuelConfig::default()).unwrap();

        assert_eq!(registry.len(), 7);
        for species in roster.all() {
            assert!(registry.is_a(species, roster.creature));
        }
        assert!(registry.is_a(roster.lad, roster.dog));
        assert!(!registry.is_a(roster.rogue, roster.dog));
    }

    #[test]
    fn test_default_cards() {
        let mut registry = SpeciesRegistry::new();
        let roster = Roster::register(&mut registry, &DuelConfig::default()).unwrap();

        let expected = [
            (roster.duck, "Peaceful Duck", 2),
            (roster.dog, "Bandit Dog", 3),
            (roster.trasher, "Trasher", 5),
            (roster.lad, "Lad", 2),
            (roster.gatling, "Gatling", 6),
            (roster.rogue, "Rogue", 2),
        ];
        for (species, name, power) in expected {
            let def = registry.get(species).unwrap();
            assert_eq!(def.card_name, name);
            assert_eq!(def.max_power, power);
        }
    }

    #[test]
    fn test_config_feeds_amounts() {
        let mut registry = SpeciesRegistry::new();
        let config = DuelConfig::default().with_armor(2).with_volley_damage(3);
        let roster = Roster::register(&mut registry, &config).unwrap();

        assert_eq!(
            registry.own_hook(roster.trasher, DamageHook::Taken),
            Some(DamageModifier::Armor { reduction: 2 })
        );
        assert_eq!(
            registry.get(roster.gatling).unwrap().attack,
            Some(AttackStyle::Volley { damage: 3 })
        );
    }

    #[test]
    fn test_registering_twice_fails() {
        let mut registry = SpeciesRegistry::new();
        Roster::register(&mut registry, &DuelConfig::default()).unwrap();

        assert_eq!(
            Roster::register(&mut registry, &DuelConfig::default()),
            Err(DuelError::DuplicateSpecies("Creature".to_string()))
        );
    }
}
