//! Attack targeting.
//!
//! An `AttackContext` is what a card sees when it attacks: who acts, who
//! defends, where the attacker stands, and a snapshot of the opposing
//! board taken when the attack hook starts.
//!
//! The snapshot is a persistent vector, so cards removed later in the same
//! turn do not change what the attack was aimed at.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{DuelError, EntityId, GameState, PlayerId};

/// The view of the board an attacking card acts on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackContext {
    /// Acting player (owner of the attacker).
    pub player: PlayerId,

    /// Defending player.
    pub opponent: PlayerId,

    /// Attacker's position on its board.
    pub position: usize,

    /// Opposing board in order.
    pub opposing_board: Vector<EntityId>,
}

impl AttackContext {
    /// Build the context for a card on a board.
    ///
    /// Returns `Ok(None)` when the card exists but is not on a board.
    pub fn for_attacker(state: &GameState, attacker: EntityId) -> Result<Option<Self>, DuelError> {
        state.card(attacker)?;
        Ok(state.position_of(attacker).map(|(player, position)| {
            let opponent = player.opponent();
            Self {
                player,
                opponent,
                position,
                opposing_board: state.board(opponent).clone(),
            }
        }))
    }

    /// The opposing card at the attacker's position, if that slot is occupied.
    #[must_use]
    pub fn target(&self) -> Option<EntityId> {
        self.opposing_board.get(self.position).copied()
    }

    /// Every opposing card, in board order.
    pub fn opposing_cards(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.opposing_board.iter().copied()
    }
}
