//! Card behaviour.
//!
//! - `engine`: the `HookContract` every card behaviour implements, with the
//!   identity base as its defaults
//! - `species`: `SpeciesHooks`, the layered implementation read from the
//!   species registry
//! - `pack`: shared in-play counters and the triangular bonus
//! - `theft`: the ability-theft resolver
//!
//! The task queue calls into `HookContract` but never interprets
//! species-specific behaviour directly.

pub mod engine;
pub mod pack;
pub mod species;
pub mod theft;

pub use engine::{Description, HookContract, Identity};
pub use pack::{triangular_bonus, SharedCounters};
pub use species::SpeciesHooks;
pub use theft::{steal_abilities, TheftReport};
