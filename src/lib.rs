//! # duckdog-duel
//!
//! A card-duel rules core: species chains with layered hooks, pack
//! bonuses, volley attacks and ability theft, run through an
//! acknowledgement-driven task queue.
//!
//! ## Design Principles
//!
//! 1. **Behaviour as Data**: Damage hooks are `DamageModifier` values kept in
//!    tables, so they can be copied, stripped and compared.
//!
//! 2. **Explicit Registries**: Species tables and shared counters belong to
//!    the `GameState`. Nothing leaks from one duel into the next.
//!
//! 3. **Steps, not Callbacks**: Hooks return the work still to do; the
//!    `TaskQueue` runs it strictly in order and parks on deferred cues.
//!
//! ## Architecture
//!
//! - **Layered Lookup**: A card's behaviour is its instance overrides, then
//!   the nearest species level that defines a hook, then the identity base.
//!
//! - **Persistent Data Structures**: Boards and the step journal are `im`
//!   vectors, so an attack snapshots the opposing board in O(1).
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, configuration, errors, state
//! - `cards`: Species definitions, hook tables, instances, registry
//! - `rules`: Hook contract, layered species hooks, pack counters, theft
//! - `effects`: Steps, attack targeting, step resolution, presentation
//! - `stack`: The task queue
//! - `games`: The sheriff-versus-bandit duel

pub mod core;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod stack;
pub mod games;

// Re-export commonly used types
pub use crate::core::{DuelConfig, DuelError, EntityId, GameState, PlayerId, PlayerMap};

pub use crate::cards::{
    AttackStyle, CardInstance, DamageHook, DamageModifier, HookTable, Lineage, PreAttack,
    SpeciesDefinition, SpeciesId, SpeciesRegistry, TraitText,
};

pub use crate::rules::{
    steal_abilities, triangular_bonus, Description, HookContract, Identity, SharedCounters,
    SpeciesHooks, TheftReport,
};

pub use crate::effects::{
    Ack, AttackContext, Cue, Flow, Headless, HookKind, Hooked, Presenter, Recorder,
    ResolverContext, Shown, Step, StepResolver,
};

pub use crate::stack::{ResolutionStatus, TaskQueue};

pub use crate::games::duel::{Duel, Roster};
