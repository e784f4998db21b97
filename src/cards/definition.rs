//! Species definitions - one level of the specialization chain.
//!
//! A `SpeciesDefinition` describes what a single level adds on top of its
//! parent: a lineage mark (duck-like, dog-like), its own damage hooks, a
//! description fragment, an attack style, a pre-attack behaviour, and
//! whether it keeps a shared counter of live instances. Anything a level
//! leaves unset is inherited from the parent.
//!
//! Per-card data (current power, overrides, in-play flag) lives in
//! `CardInstance`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::hooks::{DamageHook, DamageModifier, HookTable};

/// Unique identifier for a species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

impl SpeciesId {
    /// Create a new species ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Species({})", self.0)
    }
}

bitflags! {
    /// Family resemblance marks. A card's lineage is the union of the marks
    /// of every level in its chain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Lineage: u8 {
        /// Quacks and swims.
        const DUCK = 1 << 0;
        /// Descends from the dog species.
        const DOG  = 1 << 1;
    }
}

impl Lineage {
    /// Classification label shown as the first description line.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.contains(Lineage::DUCK | Lineage::DOG) {
            "Duck-Dog"
        } else if self.contains(Lineage::DUCK) {
            "Duck"
        } else if self.contains(Lineage::DOG) {
            "Dog"
        } else {
            "Creature"
        }
    }
}

/// Description fragment contributed by one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitText {
    /// Text of the fragment.
    pub text: String,

    /// Show the fragment only while this level still defines at least one
    /// of these hooks. Empty = always shown.
    pub while_defining: SmallVec<[DamageHook; 3]>,
}

impl TraitText {
    /// A fragment that is always shown.
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            while_defining: SmallVec::new(),
        }
    }

    /// A fragment that disappears once the level loses all of `hooks`.
    pub fn while_defining(text: impl Into<String>, hooks: impl IntoIterator<Item = DamageHook>) -> Self {
        Self {
            text: text.into(),
            while_defining: hooks.into_iter().collect(),
        }
    }
}

/// How a card attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Strike the opposing card at the same position (or the hero when empty).
    Single,
    /// Strike every opposing card in board order for a fixed amount.
    Volley {
        /// Damage dealt to each card.
        damage: i64,
    },
}

/// Work done right before a card attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreAttack {
    /// Steal the damage hooks of the target's species.
    StealAbilities,
}

/// One level of the specialization chain.
///
/// ## Example
///
/// ```
/// use duckdog_duel::cards::{DamageHook, DamageModifier, Lineage, SpeciesDefinition, SpeciesId};
///
/// let dog = SpeciesId::new(2);
/// let trasher = SpeciesDefinition::new("Trasher", "Trasher", 5)
///     .with_parent(dog)
///     .with_hook(DamageHook::Taken, DamageModifier::Armor { reduction: 1 })
///     .with_trait("Takes 1 less damage");
///
/// assert_eq!(trasher.parent, Some(dog));
/// assert!(trasher.hooks.has(DamageHook::Taken));
/// assert_eq!(trasher.lineage, Lineage::empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    /// Identifier, assigned by the registry.
    pub id: SpeciesId,

    /// Species name (unique within a registry).
    pub name: String,

    /// Parent level. `None` only for the identity base.
    pub parent: Option<SpeciesId>,

    /// Default name given to new cards of this species.
    pub card_name: String,

    /// Default max power of new cards.
    pub max_power: i64,

    /// Marks added by this level.
    pub lineage: Lineage,

    /// Damage hooks defined at this level.
    pub hooks: HookTable,

    /// Description fragment of this level.
    pub trait_text: Option<TraitText>,

    /// Attack style set by this level. `None` = inherit.
    pub attack: Option<AttackStyle>,

    /// Pre-attack work set by this level. `None` = inherit.
    pub before_attack: Option<PreAttack>,

    /// Keep a shared counter of live in-play instances of exactly this species.
    pub counts_in_play: bool,
}

impl SpeciesDefinition {
    /// Create a new level. The ID is assigned on registration.
    #[must_use]
    pub fn new(name: impl Into<String>, card_name: impl Into<String>, max_power: i64) -> Self {
        Self {
            id: SpeciesId::new(0),
            name: name.into(),
            parent: None,
            card_name: card_name.into(),
            max_power,
            lineage: Lineage::empty(),
            hooks: HookTable::new(),
            trait_text: None,
            attack: None,
            before_attack: None,
            counts_in_play: false,
        }
    }

    /// Set the parent level (builder pattern).
    #[must_use]
    pub fn with_parent(mut self, parent: SpeciesId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Add lineage marks (builder pattern).
    #[must_use]
    pub fn with_lineage(mut self, lineage: Lineage) -> Self {
        self.lineage |= lineage;
        self
    }

    /// Define a damage hook at this level (builder pattern).
    #[must_use]
    pub fn with_hook(mut self, hook: DamageHook, modifier: DamageModifier) -> Self {
        self.hooks.set(hook, modifier);
        self
    }

    /// Add an always-shown description fragment (builder pattern).
    #[must_use]
    pub fn with_trait(mut self, text: impl Into<String>) -> Self {
        self.trait_text = Some(TraitText::always(text));
        self
    }

    /// Add a description fragment (builder pattern).
    #[must_use]
    pub fn with_trait_text(mut self, text: TraitText) -> Self {
        self.trait_text = Some(text);
        self
    }

    /// Set the attack style (builder pattern).
    #[must_use]
    pub fn with_attack(mut self, attack: AttackStyle) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Set the pre-attack work (builder pattern).
    #[must_use]
    pub fn with_before_attack(mut self, before_attack: PreAttack) -> Self {
        self.before_attack = Some(before_attack);
        self
    }

    /// Keep a shared in-play counter (builder pattern).
    #[must_use]
    pub fn counted_in_play(mut self) -> Self {
        self.counts_in_play = true;
        self
    }

    /// The description fragment of this level, if it should be shown now.
    #[must_use]
    pub fn visible_trait(&self) -> Option<&str> {
        let text = self.trait_text.as_ref()?;
        let shown = text.while_defining.is_empty()
            || text.while_defining.iter().any(|&hook| self.hooks.has(hook));
        shown.then_some(text.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_id() {
        let id = SpeciesId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Species(7)");
    }

    #[test]
    fn test_lineage_labels() {
        assert_eq!(Lineage::empty().label(), "Creature");
        assert_eq!(Lineage::DUCK.label(), "Duck");
        assert_eq!(Lineage::DOG.label(), "Dog");
        assert_eq!((Lineage::DUCK | Lineage::DOG).label(), "Duck-Dog");
    }

    #[test]
    fn test_builder_defaults_inherit() {
        let def = SpeciesDefinition::new("Duck", "Peaceful Duck", 2).with_lineage(Lineage::DUCK);

        assert_eq!(def.card_name, "Peaceful Duck");
        assert_eq!(def.max_power, 2);
        assert!(def.hooks.is_empty());
        assert!(def.attack.is_none());
        assert!(def.before_attack.is_none());
        assert!(!def.counts_in_play);
        assert_eq!(def.visible_trait(), None);
    }

    #[test]
    fn test_conditional_trait_follows_hooks() {
        let pack = SpeciesId::new(1);
        let mut def = SpeciesDefinition::new("Lad", "Lad", 2)
            .with_hook(DamageHook::DealtToCreature, DamageModifier::PackBonus { pack })
            .with_trait_text(TraitText::while_defining(
                "The more of them, the stronger they are",
                [DamageHook::DealtToCreature, DamageHook::Taken],
            ));

        assert_eq!(def.visible_trait(), Some("The more of them, the stronger they are"));

        def.hooks.remove(DamageHook::DealtToCreature);
        assert_eq!(def.visible_trait(), None);
    }

    #[test]
    fn test_definition_serialization() {
        let def = SpeciesDefinition::new("Gatling", "Gatling", 6)
            .with_attack(AttackStyle::Volley { damage: 2 })
            .with_trait("Hits every enemy card");

        let json = serde_json::to_string(&def).unwrap();
        let deserialized: SpeciesDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, deserialized);
    }
}
