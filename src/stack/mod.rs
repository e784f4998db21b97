//! Step sequencing.
//!
//! Hooks describe their work as steps and the `TaskQueue` runs them
//! strictly in order, one at a time. Whenever a cue is deferred by the
//! presenter, the queue stops and reports `WaitingForAck`; the host
//! acknowledges the cue and calls `process` again.
//!
//! ## Example Usage
//!
//! ```
//! use duckdog_duel::cards::SpeciesDefinition;
//! use duckdog_duel::core::{DuelConfig, GameState, PlayerId};
//! use duckdog_duel::effects::{Headless, ResolverContext, Step};
//! use duckdog_duel::rules::Identity;
//! use duckdog_duel::stack::{ResolutionStatus, TaskQueue};
//!
//! let mut state = GameState::new(&DuelConfig::default());
//! let duck = state
//!     .species
//!     .register(SpeciesDefinition::new("Duck", "Peaceful Duck", 2))
//!     .unwrap();
//! let card = state.create_card(duck, PlayerId::SHERIFF).unwrap();
//! state.place(card).unwrap();
//!
//! let mut queue = TaskQueue::new();
//! queue.push(Step::EnterPlay(card));
//!
//! let mut presenter = Headless;
//! let mut context = ResolverContext::new(&Identity, &mut presenter);
//! let status = queue.process(&mut state, &mut context).unwrap();
//!
//! assert_eq!(status, ResolutionStatus::Complete);
//! assert!(state.card(card).unwrap().in_play);
//! ```

mod queue;

pub use queue::TaskQueue;

use serde::{Deserialize, Serialize};

use crate::effects::Cue;

/// Status returned by queue processing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    /// Every queued step has run.
    Complete,

    /// Waiting for the host to acknowledge a cue.
    WaitingForAck(Cue),
}
