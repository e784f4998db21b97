//! Game state: cards, boards, heroes, and the mutable species tables.
//!
//! ## GameState
//!
//! Everything the rules read or write during a duel:
//! - Card instances by entity ID
//! - Each player's ordered board (a persistent `im::Vector`, so a snapshot
//!   of the board at attack start is an O(1) clone)
//! - Hero power per player
//! - The `SpeciesRegistry` (species-level hooks, mutated by ability theft)
//! - The `SharedCounters` (live in-play counts per counted species)
//!
//! Registry and counters belong to the state, so nothing leaks from one
//! duel into the next.
//!
//! Boards are compact: removing a card closes the gap, and any position
//! past the end of a board is an empty slot.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::DuelConfig;
use super::entity::EntityId;
use super::error::DuelError;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{CardInstance, SpeciesId, SpeciesRegistry};
use crate::rules::pack::SharedCounters;

/// Complete duel state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Species definitions, including their live hook tables.
    pub species: SpeciesRegistry,

    /// Shared in-play counters.
    pub counters: SharedCounters,

    /// Card instances by entity ID (on or off the board).
    cards: FxHashMap<EntityId, CardInstance>,

    /// Ordered boards.
    boards: PlayerMap<Vector<EntityId>>,

    /// Hero power per player.
    hero_power: PlayerMap<i64>,

    /// Tunable numbers of the duel.
    config: DuelConfig,

    /// Next entity ID to allocate.
    next_entity_id: EntityId,
}

impl GameState {
    /// Create a new game state with an empty species registry.
    #[must_use]
    pub fn new(config: &DuelConfig) -> Self {
        Self {
            species: SpeciesRegistry::new(),
            counters: SharedCounters::new(),
            cards: FxHashMap::default(),
            boards: PlayerMap::default(),
            hero_power: PlayerMap::with_value(config.hero_power),
            config: config.clone(),
            next_entity_id: EntityId::FIRST,
        }
    }

    /// The configuration the duel was created with.
    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    // === Cards ===

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id = id.next();
        id
    }

    /// Create a card of `species` with the species' default name and power.
    ///
    /// The card is not placed on a board.
    pub fn create_card(&mut self, species: SpeciesId, owner: PlayerId) -> Result<EntityId, DuelError> {
        let definition = self.species.try_get(species)?;
        let entity_id = self.next_entity_id;
        let card = CardInstance::of_species(entity_id, definition, owner);
        self.alloc_entity();
        self.cards.insert(entity_id, card);
        Ok(entity_id)
    }

    /// Get a card instance.
    #[must_use]
    pub fn get_card(&self, entity_id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity_id)
    }

    /// Get a card instance, or an error.
    pub fn card(&self, entity_id: EntityId) -> Result<&CardInstance, DuelError> {
        self.cards.get(&entity_id).ok_or(DuelError::UnknownCard(entity_id))
    }

    /// Get a mutable card instance, or an error.
    pub fn card_mut(&mut self, entity_id: EntityId) -> Result<&mut CardInstance, DuelError> {
        self.cards.get_mut(&entity_id).ok_or(DuelError::UnknownCard(entity_id))
    }

    /// Iterate over all card instances.
    pub fn cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    // === Boards ===

    /// Get a player's board in order.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Vector<EntityId> {
        &self.boards[player]
    }

    /// The card at a board position, if the slot is occupied.
    #[must_use]
    pub fn card_at(&self, player: PlayerId, position: usize) -> Option<EntityId> {
        self.boards[player].get(position).copied()
    }

    /// Where a card sits: its owner's board and its position there.
    #[must_use]
    pub fn position_of(&self, entity_id: EntityId) -> Option<(PlayerId, usize)> {
        let owner = self.get_card(entity_id)?.owner;
        self.boards[owner]
            .index_of(&entity_id)
            .map(|position| (owner, position))
    }

    /// Check if a card is on a board.
    #[must_use]
    pub fn is_on_board(&self, entity_id: EntityId) -> bool {
        self.position_of(entity_id).is_some()
    }

    /// Place a card at the end of its owner's board. Returns its position.
    pub fn place(&mut self, entity_id: EntityId) -> Result<usize, DuelError> {
        let owner = self.card(entity_id)?.owner;
        if self.boards[owner].contains(&entity_id) {
            return Err(DuelError::AlreadyInPlay(entity_id));
        }
        if let Some(capacity) = self.config.board_capacity {
            if self.boards[owner].len() >= capacity {
                return Err(DuelError::BoardFull { player: owner, capacity });
            }
        }

        let board = &mut self.boards[owner];
        board.push_back(entity_id);
        Ok(board.len() - 1)
    }

    /// Take a card off its owner's board, closing the gap.
    ///
    /// Returns the position it occupied.
    pub fn remove_from_board(&mut self, entity_id: EntityId) -> Option<usize> {
        let (owner, position) = self.position_of(entity_id)?;
        self.boards[owner].remove(position);
        Some(position)
    }

    // === Heroes ===

    /// Current power of a player's hero.
    #[must_use]
    pub fn hero_power(&self, player: PlayerId) -> i64 {
        self.hero_power[player]
    }

    /// Reduce a hero's power, floored at zero. Returns the power actually lost.
    pub fn wound_hero(&mut self, player: PlayerId, amount: i64) -> i64 {
        let power = &mut self.hero_power[player];
        let before = *power;
        *power = (*power - amount.max(0)).max(0);
        before - *power
    }
}
