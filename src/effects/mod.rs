//! Steps, targeting, resolution, and presentation.
//!
//! - `Step`: One unit of work for the task queue
//! - `Hooked`: A hook result plus the cues to show before it is used
//! - `AttackContext`: What an attacking card sees
//! - `StepResolver`: Executes one step on game state
//! - `Presenter`: The host side that shows cues and acknowledges them

mod effect;
mod presenter;
mod resolver;
mod targeting;

pub use effect::{Cue, HookKind, Hooked, Step};
pub use presenter::{Ack, Headless, Presenter, Recorder, Shown};
pub use resolver::{Flow, ResolverContext, StepResolver};
pub use targeting::AttackContext;
