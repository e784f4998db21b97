//! Sheriff-versus-bandit duel.
//!
//! A small game over the engine:
//! - Each player has a hero with 10 power and an ordered board of cards
//! - Summoning a card runs its enter-play hooks
//! - On a turn, every card of the acting player attacks in board order
//! - Defeated cards leave play after each attack
//!
//! Deciding who won is left to the host.

mod game;
mod roster;

pub use game::Duel;
pub use roster::Roster;
