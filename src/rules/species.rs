//! Layered hooks driven by the species registry.
//!
//! `SpeciesHooks` answers every hook of the contract by walking the card's
//! species chain in the registry:
//!
//! - Damage hooks: the card's own override wins, then the nearest level
//!   that defines the hook, then the identity base
//! - Descriptions: the classification label of the whole chain, then each
//!   level's visible fragment, most general level first
//! - Lifecycle: inherited work first, then the concrete level's own work
//!   (moving its shared counter)
//! - Attack and pre-attack: the nearest level that sets a style wins
//!
//! Because every decision reads the registry at call time, ability theft
//! changes behaviour (and descriptions) immediately.

use smallvec::SmallVec;

use super::engine::{Description, HookContract};
use super::theft;
use crate::cards::{AttackStyle, DamageHook, PreAttack, SpeciesDefinition, SpeciesId};
use crate::core::{DuelError, EntityId, GameState, PlayerId};
use crate::effects::{AttackContext, Cue, Hooked, Step};

/// Hook contract backed by the species registry of the game state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeciesHooks;

impl SpeciesHooks {
    /// Create the layered hooks.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run whichever modifier `card` carries for `hook`.
    fn modify(
        state: &GameState,
        card: EntityId,
        hook: DamageHook,
        value: i64,
    ) -> Result<Hooked<i64>, DuelError> {
        let instance = state.card(card)?;
        let modifier = instance.overrides.get(hook).or_else(|| {
            state
                .species
                .resolve_hook(instance.species, hook)
                .map(|(_, modifier)| modifier)
        });

        Ok(match modifier {
            Some(modifier) => modifier.apply(value, card, &state.counters),
            None => Hooked::new(value),
        })
    }

    /// The nearest attack style of a card's chain.
    fn attack_style(state: &GameState, card: EntityId) -> Result<AttackStyle, DuelError> {
        let species = state.card(card)?.species;
        Ok(state
            .species
            .levels(species)
            .find_map(|level| level.attack)
            .unwrap_or(AttackStyle::Single))
    }

    /// The nearest pre-attack work of a card's chain.
    fn pre_attack(state: &GameState, card: EntityId) -> Result<Option<PreAttack>, DuelError> {
        let species = state.card(card)?.species;
        Ok(state.species.levels(species).find_map(|level| level.before_attack))
    }

    /// The concrete species of a card, if it keeps a shared counter.
    fn counted_species(state: &GameState, card: EntityId) -> Result<Option<SpeciesId>, DuelError> {
        let species = state.card(card)?.species;
        let definition = state.species.try_get(species)?;
        Ok(definition.counts_in_play.then_some(species))
    }
}

impl HookContract for SpeciesHooks {
    fn describe(&self, state: &GameState, card: EntityId) -> Result<Description, DuelError> {
        let species = state.card(card)?.species;
        state.species.try_get(species)?;

        let levels: SmallVec<[&SpeciesDefinition; 4]> = state.species.levels(species).collect();
        let label = state.species.lineage_marks(species).label();

        let mut lines = vec![label.to_string()];
        lines.extend(
            levels
                .iter()
                .rev()
                .filter_map(|level| level.visible_trait())
                .map(str::to_owned),
        );
        Ok(lines)
    }

    fn modify_dealt_damage_to_creature(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        _target: EntityId,
    ) -> Result<Hooked<i64>, DuelError> {
        Self::modify(state, card, DamageHook::DealtToCreature, value)
    }

    fn modify_dealt_damage_to_player(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        _player: PlayerId,
    ) -> Result<Hooked<i64>, DuelError> {
        Self::modify(state, card, DamageHook::DealtToPlayer, value)
    }

    fn modify_taken_damage(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        _source: EntityId,
    ) -> Result<Hooked<i64>, DuelError> {
        Self::modify(state, card, DamageHook::Taken, value)
    }

    fn on_enter_play(&self, state: &mut GameState, card: EntityId) -> Result<Hooked<()>, DuelError> {
        if let Some(species) = Self::counted_species(state, card)? {
            state.counters.increment(species);
        }
        Ok(Hooked::new(()))
    }

    fn on_leave_play(&self, state: &mut GameState, card: EntityId) -> Result<Hooked<()>, DuelError> {
        if let Some(species) = Self::counted_species(state, card)? {
            state.counters.decrement(species);
        }
        Ok(Hooked::new(()))
    }

    fn before_attack(
        &self,
        state: &mut GameState,
        card: EntityId,
        context: &AttackContext,
    ) -> Result<Vec<Step>, DuelError> {
        match Self::pre_attack(state, card)? {
            Some(PreAttack::StealAbilities) => {
                let report = theft::steal_abilities(state, card, context)?;
                Ok(report.refreshed.into_iter().map(Step::Refresh).collect())
            }
            None => Ok(Vec::new()),
        }
    }

    fn attack(
        &self,
        state: &GameState,
        card: EntityId,
        context: &AttackContext,
    ) -> Result<Vec<Step>, DuelError> {
        match Self::attack_style(state, card)? {
            AttackStyle::Single => Ok(vec![Step::Present(Cue::ShowAttack(card)), Step::Strike(card)]),
            AttackStyle::Volley { damage } => {
                let mut steps = Vec::with_capacity(context.opposing_board.len() + 1);
                steps.push(Step::Present(Cue::ShowAttack(card)));
                steps.extend(context.opposing_cards().map(|target| Step::DealDamageToCreature {
                    source: card,
                    target,
                    amount: damage,
                }));
                Ok(steps)
            }
        }
    }
}
