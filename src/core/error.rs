//! Duel errors.
//!
//! Game-rule outcomes (an empty target slot, damage reduced below zero, a
//! repeated theft) are ordinary control flow and never show up here. These
//! variants report misuse of the API by the driver or a hook implementation.

use crate::cards::SpeciesId;
use crate::core::{EntityId, PlayerId};

/// Errors raised while driving a duel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    /// No card with this ID exists in the game state.
    #[error("unknown card {0}")]
    UnknownCard(EntityId),

    /// No species with this ID is registered.
    #[error("unknown species {0}")]
    UnknownSpecies(SpeciesId),

    /// A species with this name is already registered.
    #[error("species '{0}' is already registered")]
    DuplicateSpecies(String),

    /// The card is already in play and cannot enter again.
    #[error("{0} is already in play")]
    AlreadyInPlay(EntityId),

    /// The card is not in play and cannot leave.
    #[error("{0} is not in play")]
    NotInPlay(EntityId),

    /// The player's board has no free slot.
    #[error("{player}'s board is full ({capacity} cards)")]
    BoardFull {
        /// Owner of the board.
        player: PlayerId,
        /// Configured capacity.
        capacity: usize,
    },

    /// An acknowledgement arrived while no cue was waiting for one.
    #[error("acknowledgement received while no cue is pending")]
    UnexpectedAcknowledgement,
}
