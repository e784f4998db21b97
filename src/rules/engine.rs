//! Hook contract for card behaviour.
//!
//! The task queue calls into a `HookContract` whenever a card's behaviour
//! matters:
//! - Describing a card
//! - Modifying damage on its way out of or into a card
//! - Entering and leaving play
//! - Preparing an attack, and the attack itself
//!
//! Every method has a default that is the identity base: damage passes
//! through unchanged, lifecycle hooks do nothing, the description is
//! `["Creature"]`, and the attack is a single strike at the opposing card.
//!
//! Hooks never call back into the queue. Work that must happen after a
//! hook (presentation, damage, refreshes) is returned as cues or steps and
//! the queue runs it in order.

use crate::core::{DuelError, EntityId, GameState, PlayerId};
use crate::effects::{AttackContext, Cue, Hooked, Step};

/// Description lines, most general first.
pub type Description = Vec<String>;

/// Card behaviour seen by the task queue.
///
/// ## Implementation Notes
///
/// - Damage hooks read the state; lifecycle and pre-attack hooks may write it
/// - A hook that fails leaves the queue stopped at the failing step
/// - `attack` must not remove cards; defeated cards are swept afterwards
pub trait HookContract {
    /// Describe a card.
    fn describe(&self, state: &GameState, card: EntityId) -> Result<Description, DuelError> {
        state.card(card)?;
        Ok(vec!["Creature".to_string()])
    }

    /// Modify damage `card` deals to the creature `target`.
    fn modify_dealt_damage_to_creature(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        target: EntityId,
    ) -> Result<Hooked<i64>, DuelError> {
        let _ = (state, card, target);
        Ok(Hooked::new(value))
    }

    /// Modify damage `card` deals to the hero of `player`.
    fn modify_dealt_damage_to_player(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        player: PlayerId,
    ) -> Result<Hooked<i64>, DuelError> {
        let _ = (state, card, player);
        Ok(Hooked::new(value))
    }

    /// Modify damage `card` takes from `source`.
    fn modify_taken_damage(
        &self,
        state: &GameState,
        card: EntityId,
        value: i64,
        source: EntityId,
    ) -> Result<Hooked<i64>, DuelError> {
        let _ = (state, card, source);
        Ok(Hooked::new(value))
    }

    /// Called once after `card` entered play.
    fn on_enter_play(&self, state: &mut GameState, card: EntityId) -> Result<Hooked<()>, DuelError> {
        let _ = (state, card);
        Ok(Hooked::new(()))
    }

    /// Called once before `card` leaves play.
    fn on_leave_play(&self, state: &mut GameState, card: EntityId) -> Result<Hooked<()>, DuelError> {
        let _ = (state, card);
        Ok(Hooked::new(()))
    }

    /// Work done right before `card` attacks.
    fn before_attack(
        &self,
        state: &mut GameState,
        card: EntityId,
        context: &AttackContext,
    ) -> Result<Vec<Step>, DuelError> {
        let _ = (state, card, context);
        Ok(Vec::new())
    }

    /// The attack of `card`: show it, then strike.
    fn attack(
        &self,
        state: &GameState,
        card: EntityId,
        context: &AttackContext,
    ) -> Result<Vec<Step>, DuelError> {
        let _ = (state, context);
        Ok(vec![Step::Present(Cue::ShowAttack(card)), Step::Strike(card)])
    }
}

/// The identity base on its own: every card behaves like a plain creature.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl HookContract for Identity {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SpeciesDefinition;
    use crate::core::DuelConfig;

    fn setup() -> (GameState, EntityId, EntityId) {
        let mut state = GameState::new(&DuelConfig::default());
        let duck = state
            .species
            .register(SpeciesDefinition::new("Duck", "Peaceful Duck", 2))
            .unwrap();
        let ours = state.create_card(duck, PlayerId::SHERIFF).unwrap();
        let theirs = state.create_card(duck, PlayerId::BANDIT).unwrap();
        state.place(ours).unwrap();
        state.place(theirs).unwrap();
        (state, ours, theirs)
    }

    #[test]
    fn test_identity_passes_damage_through() {
        let (state, ours, theirs) = setup();

        let dealt = Identity.modify_dealt_damage_to_creature(&state, ours, 4, theirs).unwrap();
        let taken = Identity.modify_taken_damage(&state, theirs, -3, ours).unwrap();

        assert_eq!(dealt, Hooked::new(4));
        assert_eq!(taken, Hooked::new(-3));
    }

    #[test]
    fn test_identity_description() {
        let (state, ours, _) = setup();
        assert_eq!(Identity.describe(&state, ours).unwrap(), vec!["Creature".to_string()]);
        assert_eq!(
            Identity.describe(&state, EntityId(77)),
            Err(DuelError::UnknownCard(EntityId(77)))
        );
    }

    #[test]
    fn test_identity_attack_is_single_strike() {
        let (mut state, ours, _) = setup();
        let context = AttackContext::for_attacker(&state, ours).unwrap().unwrap();

        assert!(Identity.before_attack(&mut state, ours, &context).unwrap().is_empty());
        assert_eq!(
            Identity.attack(&state, ours, &context).unwrap(),
            vec![Step::Present(Cue::ShowAttack(ours)), Step::Strike(ours)]
        );
    }
}
