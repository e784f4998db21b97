//! Species registry - the mutable table of species-level behaviour.
//!
//! The `SpeciesRegistry` stores every species of a duel and answers lineage
//! questions: the chain from a species up to the identity base, whether one
//! species descends from another, and which level defines a damage hook.
//!
//! It is owned by the `GameState`, so species-level changes (ability theft
//! stripping a hook) last exactly as long as the game they happened in.
//!
//! A species can only name an already-registered parent, which keeps every
//! chain finite and acyclic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{Lineage, SpeciesDefinition, SpeciesId};
use super::hooks::{DamageHook, DamageModifier};
use crate::core::DuelError;

/// Chain of species IDs, concrete species first.
pub type LineageChain = SmallVec<[SpeciesId; 4]>;

/// Registry of species definitions.
///
/// ## Example
///
/// ```
/// use duckdog_duel::cards::{SpeciesDefinition, SpeciesRegistry};
///
/// let mut registry = SpeciesRegistry::new();
/// let base = registry.register(SpeciesDefinition::new("Creature", "Creature", 1)).unwrap();
/// let dog = registry
///     .register(SpeciesDefinition::new("Dog", "Bandit Dog", 3).with_parent(base))
///     .unwrap();
///
/// assert!(registry.is_a(dog, base));
/// assert_eq!(registry.lineage(dog).as_slice(), &[dog, base]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpeciesRegistry {
    species: FxHashMap<SpeciesId, SpeciesDefinition>,
    next_id: u32,
}

impl SpeciesRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a species and assign its ID.
    ///
    /// Fails if the name is taken or the parent is unknown.
    pub fn register(&mut self, mut species: SpeciesDefinition) -> Result<SpeciesId, DuelError> {
        if self.find_by_name(&species.name).is_some() {
            return Err(DuelError::DuplicateSpecies(species.name));
        }
        if let Some(parent) = species.parent {
            if !self.contains(parent) {
                return Err(DuelError::UnknownSpecies(parent));
            }
        }

        let id = SpeciesId::new(self.next_id);
        self.next_id += 1;
        species.id = id;

        tracing::debug!(species = %species.name, %id, parent = ?species.parent, "registered species");
        self.species.insert(id, species);
        Ok(id)
    }

    /// The ID the next registered species will receive.
    ///
    /// Lets a species name itself in its own hooks (a pack bonus fed by its
    /// own counter).
    #[must_use]
    pub fn next_id(&self) -> SpeciesId {
        SpeciesId::new(self.next_id)
    }

    /// Get a species definition by ID.
    #[must_use]
    pub fn get(&self, id: SpeciesId) -> Option<&SpeciesDefinition> {
        self.species.get(&id)
    }

    /// Get a species definition by ID, or an error.
    pub fn try_get(&self, id: SpeciesId) -> Result<&SpeciesDefinition, DuelError> {
        self.get(id).ok_or(DuelError::UnknownSpecies(id))
    }

    /// Check if a species ID is registered.
    #[must_use]
    pub fn contains(&self, id: SpeciesId) -> bool {
        self.species.contains_key(&id)
    }

    /// Get the number of registered species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Find a species by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&SpeciesDefinition> {
        self.species.values().find(|s| s.name == name)
    }

    /// The chain from `id` up to the identity base, concrete species first.
    ///
    /// Unknown IDs yield an empty chain.
    #[must_use]
    pub fn lineage(&self, id: SpeciesId) -> LineageChain {
        let mut chain = LineageChain::new();
        let mut current = self.get(id);
        while let Some(level) = current {
            chain.push(level.id);
            current = level.parent.and_then(|parent| self.get(parent));
        }
        chain
    }

    /// Iterate over the levels of a chain, concrete species first.
    pub fn levels(&self, id: SpeciesId) -> impl Iterator<Item = &SpeciesDefinition> + '_ {
        std::iter::successors(self.get(id), move |level| {
            level.parent.and_then(|parent| self.get(parent))
        })
    }

    /// Check if `id` is `ancestor` or one of its specializations.
    #[must_use]
    pub fn is_a(&self, id: SpeciesId, ancestor: SpeciesId) -> bool {
        self.levels(id).any(|level| level.id == ancestor)
    }

    /// Union of the lineage marks of the whole chain.
    #[must_use]
    pub fn lineage_marks(&self, id: SpeciesId) -> Lineage {
        self.levels(id).fold(Lineage::empty(), |marks, level| marks | level.lineage)
    }

    /// The hook defined at exactly this level, ignoring ancestors.
    #[must_use]
    pub fn own_hook(&self, id: SpeciesId, hook: DamageHook) -> Option<DamageModifier> {
        self.get(id).and_then(|level| level.hooks.get(hook))
    }

    /// The nearest level of the chain that defines `hook`, and its modifier.
    #[must_use]
    pub fn resolve_hook(&self, id: SpeciesId, hook: DamageHook) -> Option<(SpeciesId, DamageModifier)> {
        self.levels(id)
            .find_map(|level| level.hooks.get(hook).map(|modifier| (level.id, modifier)))
    }

    /// Remove a hook from exactly this level.
    ///
    /// Every current and future card of the species loses it.
    pub fn strip_hook(&mut self, id: SpeciesId, hook: DamageHook) -> Option<DamageModifier> {
        let removed = self.species.get_mut(&id)?.hooks.remove(hook);
        if removed.is_some() {
            tracing::debug!(species = %id, %hook, "stripped species hook");
        }
        removed
    }

    /// Iterate over all species definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDefinition> {
        self.species.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_registry() -> (SpeciesRegistry, SpeciesId, SpeciesId, SpeciesId) {
        let mut registry = SpeciesRegistry::new();
        let base = registry.register(SpeciesDefinition::new("Creature", "Creature", 1)).unwrap();
        let dog = registry
            .register(
                SpeciesDefinition::new("Dog", "Bandit Dog", 3)
                    .with_parent(base)
                    .with_lineage(Lineage::DOG)
                    .with_hook(DamageHook::Taken, DamageModifier::Armor { reduction: 2 }),
            )
            .unwrap();
        let trasher = registry
            .register(
                SpeciesDefinition::new("Trasher", "Trasher", 5)
                    .with_parent(dog)
                    .with_hook(DamageHook::Taken, DamageModifier::Armor { reduction: 1 }),
            )
            .unwrap();
        (registry, base, dog, trasher)
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let (registry, base, dog, trasher) = chain_registry();

        assert_eq!(base, SpeciesId::new(0));
        assert_eq!(dog, SpeciesId::new(1));
        assert_eq!(trasher, SpeciesId::new(2));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.next_id(), SpeciesId::new(3));
        assert_eq!(registry.get(dog).unwrap().id, dog);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (mut registry, ..) = chain_registry();

        let result = registry.register(SpeciesDefinition::new("Dog", "Other Dog", 1));
        assert_eq!(result, Err(DuelError::DuplicateSpecies("Dog".to_string())));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut registry = SpeciesRegistry::new();

        let result = registry.register(
            SpeciesDefinition::new("Orphan", "Orphan", 1).with_parent(SpeciesId::new(42)),
        );
        assert_eq!(result, Err(DuelError::UnknownSpecies(SpeciesId::new(42))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lineage_and_is_a() {
        let (registry, base, dog, trasher) = chain_registry();

        assert_eq!(registry.lineage(trasher).as_slice(), &[trasher, dog, base]);
        assert!(registry.is_a(trasher, dog));
        assert!(registry.is_a(trasher, trasher));
        assert!(!registry.is_a(dog, trasher));
        assert!(registry.lineage(SpeciesId::new(99)).is_empty());
    }

    #[test]
    fn test_lineage_marks_are_inherited() {
        let (registry, base, _, trasher) = chain_registry();

        assert_eq!(registry.lineage_marks(trasher), Lineage::DOG);
        assert_eq!(registry.lineage_marks(base), Lineage::empty());
    }

    #[test]
    fn test_resolve_hook_prefers_nearest_level() {
        let (mut registry, _, dog, trasher) = chain_registry();

        assert_eq!(
            registry.resolve_hook(trasher, DamageHook::Taken),
            Some((trasher, DamageModifier::Armor { reduction: 1 }))
        );

        registry.strip_hook(trasher, DamageHook::Taken);
        assert_eq!(
            registry.resolve_hook(trasher, DamageHook::Taken),
            Some((dog, DamageModifier::Armor { reduction: 2 }))
        );
        assert_eq!(registry.own_hook(trasher, DamageHook::Taken), None);
    }

    #[test]
    fn test_strip_missing_hook_is_noop() {
        let (mut registry, base, ..) = chain_registry();
        assert_eq!(registry.strip_hook(base, DamageHook::DealtToPlayer), None);
        assert_eq!(registry.strip_hook(SpeciesId::new(99), DamageHook::Taken), None);
    }
}
