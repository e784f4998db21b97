//! Step definitions.
//!
//! A `Step` is one unit of work in a hook chain. Hooks never call back into
//! the driver; they return the steps still to run, and the `TaskQueue` runs
//! them strictly in order. A hook chain is finished when its `Resume`
//! marker runs.
//!
//! Damage-modifying hooks return a `Hooked` value: the modified number plus
//! the presentation cues that must be acknowledged before the number is
//! used any further.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EntityId, PlayerId};

/// Presentation cue that may need an acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Play the attack animation of a card.
    ShowAttack(EntityId),
    /// Highlight a card whose special ability just fired.
    SignalAbility(EntityId),
    /// Show a card losing power.
    Damage {
        /// Damaged card.
        target: EntityId,
        /// Power lost.
        amount: i64,
    },
    /// Show a hero losing power.
    HeroDamage {
        /// Damaged hero.
        player: PlayerId,
        /// Power lost.
        amount: i64,
    },
}

/// Hook chain that ends with a `Resume` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookKind {
    /// After the card entered play.
    EnterPlay,
    /// Before the card leaves play.
    LeavePlay,
    /// Right before the card attacks.
    BeforeAttack,
    /// The attack itself.
    Attack,
}

/// One unit of work for the task queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    // === Presentation ===

    /// Show a cue and wait for its acknowledgement.
    Present(Cue),

    /// Redraw a card. Never waits.
    Refresh(EntityId),

    // === Lifecycle ===

    /// Run the enter-play hooks of a card that was just placed.
    EnterPlay(EntityId),

    /// Run the leave-play hooks of a card about to be removed.
    LeavePlay(EntityId),

    /// Take a card off its board.
    Remove(EntityId),

    /// Take every defeated card through leave-play and removal.
    Sweep,

    // === Attack ===

    /// Run the pre-attack hook of a card.
    BeforeAttack(EntityId),

    /// Run the attack hook of a card.
    Attack(EntityId),

    /// Default attack damage: hit the opposing card at the attacker's
    /// position, or the hero when that slot is empty.
    Strike(EntityId),

    // === Damage pipeline ===

    /// Run the source's dealt-to-creature hook, then let the target take it.
    DealDamageToCreature {
        /// Attacking card.
        source: EntityId,
        /// Card being hit.
        target: EntityId,
        /// Damage before modifiers.
        amount: i64,
    },

    /// Run the source's dealt-to-player hook, then wound the hero.
    DealDamageToPlayer {
        /// Attacking card.
        source: EntityId,
        /// Hero being hit.
        player: PlayerId,
        /// Damage before modifiers.
        amount: i64,
    },

    /// Run the target's taken hook, then wound it.
    TakeDamage {
        /// Attacking card.
        source: EntityId,
        /// Card being hit.
        target: EntityId,
        /// Damage after the source's modifiers.
        amount: i64,
    },

    /// Remove power from a card.
    Wound {
        /// Card losing power.
        target: EntityId,
        /// Final damage.
        amount: i64,
    },

    /// Remove power from a hero.
    WoundHero {
        /// Hero losing power.
        player: PlayerId,
        /// Final damage.
        amount: i64,
    },

    // === Continuation ===

    /// Marks that a card's hook chain completed.
    Resume {
        /// Card whose hook finished.
        card: EntityId,
        /// Which hook finished.
        hook: HookKind,
    },
}

impl Step {
    /// Resume marker for a card's hook.
    #[must_use]
    pub fn resume(card: EntityId, hook: HookKind) -> Self {
        Self::Resume { card, hook }
    }
}

/// A hook result plus the cues that must be acknowledged before it is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hooked<T> {
    /// Result of the hook.
    pub value: T,
    /// Cues to present first, in order.
    pub cues: SmallVec<[Cue; 2]>,
}

impl<T> Hooked<T> {
    /// A result with no presentation work.
    pub fn new(value: T) -> Self {
        Self {
            value,
            cues: SmallVec::new(),
        }
    }

    /// Add a cue (builder pattern).
    #[must_use]
    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cues.push(cue);
        self
    }

    /// Cues as presentation steps, followed by `then`.
    pub fn then(self, then: Step) -> (T, Vec<Step>) {
        let mut steps: Vec<Step> = self.cues.into_iter().map(Step::Present).collect();
        steps.push(then);
        (self.value, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hooked_new_has_no_cues() {
        let hooked = Hooked::new(3);
        assert_eq!(hooked.value, 3);
        assert!(hooked.cues.is_empty());
    }

    #[test]
    fn test_hooked_then_orders_cues_first() {
        let card = EntityId(4);
        let ((), steps) = Hooked::new(())
            .with_cue(Cue::SignalAbility(card))
            .then(Step::resume(card, HookKind::EnterPlay));

        assert_eq!(
            steps,
            vec![
                Step::Present(Cue::SignalAbility(card)),
                Step::resume(card, HookKind::EnterPlay),
            ]
        );
    }

    #[test]
    fn test_step_serialization() {
        let step = Step::DealDamageToCreature {
            source: EntityId(1),
            target: EntityId(2),
            amount: 2,
        };
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
