//! Card system: species, hooks, instances, and registry.
//!
//! ## Key Types
//!
//! - `SpeciesId`: Identifier for one level of the specialization chain
//! - `SpeciesDefinition`: What a level adds on top of its parent
//! - `DamageHook` / `DamageModifier`: Damage hooks as copyable data
//! - `HookTable`: One modifier slot per damage hook
//! - `CardInstance`: Runtime card state (power, in-play flag, overrides)
//! - `SpeciesRegistry`: Mutable species-level behaviour of a duel

pub mod definition;
pub mod hooks;
pub mod instance;
pub mod registry;

pub use definition::{AttackStyle, Lineage, PreAttack, SpeciesDefinition, SpeciesId, TraitText};
pub use hooks::{DamageHook, DamageModifier, HookTable};
pub use instance::CardInstance;
pub use registry::{LineageChain, SpeciesRegistry};
