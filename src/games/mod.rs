//! Games built on the engine.

pub mod duel;
