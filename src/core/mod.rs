//! Core duel types: entities, players, configuration, errors, state.
//!
//! This module contains the building blocks every other module leans on.
//! Species-specific behaviour lives in `cards` and `rules`, never here.

pub mod entity;
pub mod player;
pub mod config;
pub mod error;
pub mod state;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap, SEATS};
pub use config::DuelConfig;
pub use error::DuelError;
pub use state::GameState;
