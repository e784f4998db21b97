//! Task queue - strictly ordered step execution.
//!
//! Steps run one at a time, front to back. A step that expands pushes its
//! new steps to the front, so a hook's work always finishes before
//! anything queued after the hook. A step that waits on a cue parks the
//! queue until `acknowledge` is called; nothing else runs meanwhile.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DuelError, GameState};
use crate::effects::{Cue, Flow, ResolverContext, Step, StepResolver};

use super::ResolutionStatus;

/// Ordered queue of pending steps.
///
/// ## Behavior
///
/// - `push()` / `extend()`: Append steps to the back
/// - `process()`: Run steps until the queue is empty or a cue is deferred
/// - `acknowledge()`: Release the deferred cue so `process()` can go on
/// - `journal()`: Every step run so far, in execution order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskQueue {
    /// Steps still to run.
    pending: VecDeque<Step>,

    /// Cue waiting for an acknowledgement.
    awaiting: Option<Cue>,

    /// Steps already run.
    journal: Vector<Step>,
}

impl TaskQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.pending.push_back(step);
    }

    /// Append steps in order.
    pub fn extend(&mut self, steps: impl IntoIterator<Item = Step>) {
        self.pending.extend(steps);
    }

    /// Get the number of pending steps.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// The cue the queue is waiting on, if any.
    #[must_use]
    pub fn awaiting(&self) -> Option<&Cue> {
        self.awaiting.as_ref()
    }

    /// Check if nothing is pending or waiting.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty() && self.awaiting.is_none()
    }

    /// Every step run so far, in execution order.
    #[must_use]
    pub fn journal(&self) -> &Vector<Step> {
        &self.journal
    }

    /// Run steps until the queue is empty or a cue is deferred.
    ///
    /// A failing step is dropped and the error returned; the rest of the
    /// queue stays pending.
    pub fn process(
        &mut self,
        state: &mut GameState,
        context: &mut ResolverContext<'_>,
    ) -> Result<ResolutionStatus, DuelError> {
        if let Some(cue) = &self.awaiting {
            return Ok(ResolutionStatus::WaitingForAck(cue.clone()));
        }

        while let Some(step) = self.pending.pop_front() {
            let flow = StepResolver::resolve(state, &step, context)?;
            self.journal.push_back(step);

            match flow {
                Flow::Continue => {}
                Flow::Expand(steps) => {
                    for step in steps.into_iter().rev() {
                        self.pending.push_front(step);
                    }
                }
                Flow::Await(cue) => {
                    tracing::trace!(?cue, "waiting for acknowledgement");
                    self.awaiting = Some(cue.clone());
                    return Ok(ResolutionStatus::WaitingForAck(cue));
                }
            }
        }

        Ok(ResolutionStatus::Complete)
    }

    /// Acknowledge the cue the queue is waiting on.
    pub fn acknowledge(&mut self) -> Result<Cue, DuelError> {
        self.awaiting.take().ok_or(DuelError::UnexpectedAcknowledgement)
    }

    /// Drop all pending work.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.awaiting = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SpeciesDefinition;
    use crate::core::{DuelConfig, EntityId, PlayerId};
    use crate::effects::{HookKind, Recorder};
    use crate::rules::Identity;

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
    fn test_queue_new() {
        let queue = TaskQueue::new();
        assert!(queue.is_complete());
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.journal().is_empty());
    }

    #[test]
    fn test_expanded_steps_run_before_queued_ones() {
        let (mut state, ours, theirs) = setup();
        let mut recorder = Recorder::new();
        let mut context = ResolverContext::new(&Identity, &mut recorder);

        let mut queue = TaskQueue::new();
        queue.push(Step::Attack(ours));
        queue.push(Step::Refresh(theirs));

        let status = queue.process(&mut state, &mut context).unwrap();
        assert_eq!(status, ResolutionStatus::Complete);

        let journal: Vec<_> = queue.journal().iter().cloned().collect();
        let resume = journal
            .iter()
            .position(|step| *step == Step::resume(ours, HookKind::Attack))
            .unwrap();
        assert_eq!(journal.last(), Some(&Step::Refresh(theirs)));
        assert_eq!(resume, journal.len() - 2);
        assert_eq!(state.card(theirs).unwrap().power(), 0);
    }

    #[test]
    fn test_deferred_cue_parks_queue() {
        let (mut state, ours, _) = setup();
        let mut recorder = Recorder::deferring();
        let mut context = ResolverContext::new(&Identity, &mut recorder);

        let mut queue = TaskQueue::new();
        queue.push(Step::Present(Cue::ShowAttack(ours)));
        queue.push(Step::Refresh(ours));

        let status = queue.process(&mut state, &mut context).unwrap();
        assert_eq!(status, ResolutionStatus::WaitingForAck(Cue::ShowAttack(ours)));
        assert_eq!(queue.pending_count(), 1);

        // Still parked until acknowledged.
        let again = queue.process(&mut state, &mut context).unwrap();
        assert_eq!(again, status);

        assert_eq!(queue.acknowledge(), Ok(Cue::ShowAttack(ours)));
        assert_eq!(queue.process(&mut state, &mut context), Ok(ResolutionStatus::Complete));
        assert!(queue.is_complete());
    }

    #[test]
    fn test_unexpected_acknowledgement() {
        let mut queue = TaskQueue::new();
        assert_eq!(queue.acknowledge(), Err(DuelError::UnexpectedAcknowledgement));
    }

    #[test]
    fn test_failing_step_keeps_rest_pending() {
        let (mut state, ours, _) = setup();
        let mut recorder = Recorder::new();
        let mut context = ResolverContext::new(&Identity, &mut recorder);

        let mut queue = TaskQueue::new();
        queue.push(Step::LeavePlay(ours));
        queue.push(Step::Refresh(ours));

        assert_eq!(
            queue.process(&mut state, &mut context),
            Err(DuelError::NotInPlay(ours))
        );
        assert_eq!(queue.pending_count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut queue = TaskQueue::new();
        queue.push(Step::Sweep);
        assert!(!queue.is_complete());

        queue.clear();
        assert!(queue.is_complete());
    }
}
