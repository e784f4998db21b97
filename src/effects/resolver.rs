//! Step resolution - executing one step on the game state.
//!
//! The `StepResolver` runs a single step and reports how the queue should
//! carry on: move to the next step, run some new steps first, or wait for
//! the host to acknowledge a cue. Card behaviour comes from the
//! `HookContract` in the context; the resolver itself only knows the
//! shape of the damage pipeline and the lifecycle.

use crate::core::{DuelError, GameState, PlayerId};
use crate::rules::HookContract;

use super::effect::{Cue, HookKind, Step};
use super::presenter::{Ack, Presenter};
use super::targeting::AttackContext;

/// Context for resolving steps.
///
/// The driver builds one per `process` call, lending out its hook contract
/// and presenter.
pub struct ResolverContext<'a> {
    /// Card behaviour.
    pub hooks: &'a dyn HookContract,
    /// Where cues and refreshes go.
    pub presenter: &'a mut dyn Presenter,
}

impl<'a> ResolverContext<'a> {
    /// Create a new context.
    pub fn new(hooks: &'a dyn HookContract, presenter: &'a mut dyn Presenter) -> Self {
        Self { hooks, presenter }
    }
}

/// How the queue continues after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Step finished; run the next one.
    Continue,
    /// Run these steps, in order, before anything already queued.
    Expand(Vec<Step>),
    /// Stop until the host acknowledges this cue.
    Await(Cue),
}

/// Resolves steps on game state.
pub struct StepResolver;

impl StepResolver {
    /// Resolve a single step.
    pub fn resolve(
        state: &mut GameState,
        step: &Step,
        context: &mut ResolverContext<'_>,
    ) -> Result<Flow, DuelError> {
        let hooks = context.hooks;

        match *step {
            Step::Present(ref cue) => Ok(match context.presenter.present(cue) {
                Ack::Done => Flow::Continue,
                Ack::Deferred => Flow::Await(cue.clone()),
            }),

            Step::Refresh(card) => {
                context.presenter.refresh(card);
                Ok(Flow::Continue)
            }

            Step::EnterPlay(card) => {
                if state.card(card)?.in_play {
                    return Err(DuelError::AlreadyInPlay(card));
                }

                let ((), mut steps) = hooks.on_enter_play(state, card)?.then(Step::Refresh(card));
                state.card_mut(card)?.in_play = true;
                steps.push(Step::resume(card, HookKind::EnterPlay));
                tracing::debug!(%card, "entered play");
                Ok(Flow::Expand(steps))
            }

            Step::LeavePlay(card) => {
                if !state.card(card)?.in_play {
                    return Err(DuelError::NotInPlay(card));
                }

                let ((), steps) = hooks
                    .on_leave_play(state, card)?
                    .then(Step::resume(card, HookKind::LeavePlay));
                state.card_mut(card)?.in_play = false;
                tracing::debug!(%card, "left play");
                Ok(Flow::Expand(steps))
            }

            Step::Remove(card) => {
                if state.remove_from_board(card).is_some() {
                    context.presenter.refresh(card);
                    tracing::debug!(%card, "removed from board");
                }
                Ok(Flow::Continue)
            }

            // Cards still waiting on their enter-play hooks are left for a
            // later sweep.
            Step::Sweep => {
                let mut steps = Vec::new();
                for player in PlayerId::both() {
                    for card in state.board(player).iter().copied() {
                        let instance = state.card(card)?;
                        if instance.in_play && instance.is_defeated() {
                            steps.push(Step::LeavePlay(card));
                            steps.push(Step::Remove(card));
                        }
                    }
                }
                Ok(if steps.is_empty() { Flow::Continue } else { Flow::Expand(steps) })
            }

            Step::BeforeAttack(card) => {
                let Some(attack) = AttackContext::for_attacker(state, card)? else {
                    return Ok(Flow::Continue);
                };
                let mut steps = hooks.before_attack(state, card, &attack)?;
                steps.push(Step::resume(card, HookKind::BeforeAttack));
                Ok(Flow::Expand(steps))
            }

            Step::Attack(card) => {
                let Some(attack) = AttackContext::for_attacker(state, card)? else {
                    return Ok(Flow::Continue);
                };
                let mut steps = hooks.attack(state, card, &attack)?;
                steps.push(Step::resume(card, HookKind::Attack));
                Ok(Flow::Expand(steps))
            }

            Step::Strike(source) => {
                let Some(attack) = AttackContext::for_attacker(state, source)? else {
                    return Ok(Flow::Continue);
                };
                let next = match attack.target() {
                    Some(target) => Step::DealDamageToCreature {
                        source,
                        target,
                        amount: state.card(source)?.power(),
                    },
                    None => Step::DealDamageToPlayer {
                        source,
                        player: attack.opponent,
                        amount: state.config().hero_strike,
                    },
                };
                Ok(Flow::Expand(vec![next]))
            }

            Step::DealDamageToCreature { source, target, amount } => {
                let hooked = hooks.modify_dealt_damage_to_creature(state, source, amount, target)?;
                let next = Step::TakeDamage { source, target, amount: hooked.value };
                Ok(Flow::Expand(hooked.then(next).1))
            }

            Step::DealDamageToPlayer { source, player, amount } => {
                let hooked = hooks.modify_dealt_damage_to_player(state, source, amount, player)?;
                let next = Step::WoundHero { player, amount: hooked.value };
                Ok(Flow::Expand(hooked.then(next).1))
            }

            Step::TakeDamage { source, target, amount } => {
                let hooked = hooks.modify_taken_damage(state, target, amount, source)?;
                let next = Step::Wound { target, amount: hooked.value };
                Ok(Flow::Expand(hooked.then(next).1))
            }

            // Damage below zero is clamped here, at the end of the pipeline.
            Step::Wound { target, amount } => {
                if amount <= 0 {
                    return Ok(Flow::Continue);
                }
                let lost = state.card_mut(target)?.wound(amount);
                tracing::debug!(%target, amount, lost, "card wounded");
                Ok(Flow::Expand(vec![
                    Step::Present(Cue::Damage { target, amount }),
                    Step::Refresh(target),
                ]))
            }

            Step::WoundHero { player, amount } => {
                if amount <= 0 {
                    return Ok(Flow::Continue);
                }
                let lost = state.wound_hero(player, amount);
                tracing::debug!(%player, amount, lost, "hero wounded");
                Ok(Flow::Expand(vec![Step::Present(Cue::HeroDamage { player, amount })]))
            }

            Step::Resume { card, hook } => {
                tracing::trace!(%card, ?hook, "hook finished");
                Ok(Flow::Continue)
            }
        }
    }
}
