//! Duel driver.

use crate::cards::SpeciesId;
use crate::core::{DuelConfig, DuelError, EntityId, GameState, PlayerId};
use crate::effects::{Presenter, ResolverContext, Step};
use crate::rules::{Description, HookContract, SpeciesHooks};
use crate::stack::{ResolutionStatus, TaskQueue};

use super::roster::Roster;

/// A duel between the sheriff and the bandit.
///
/// The driver only queues work; nothing happens until `run` is called.
/// When `run` reports `WaitingForAck`, the host finishes presenting the
/// cue and calls `acknowledge`, which carries on from the same step.
pub struct Duel<P: Presenter> {
    state: GameState,
    roster: Roster,
    hooks: SpeciesHooks,
    queue: TaskQueue,
    presenter: P,
}

impl<P: Presenter> Duel<P> {
    /// Create an empty duel with the built-in roster registered.
    pub fn new(config: DuelConfig, mut presenter: P) -> Result<Self, DuelError> {
        let mut state = GameState::new(&config);
        let roster = Roster::register(&mut state.species, &config)?;
        presenter.set_speed_rate(config.speed_rate);

        tracing::debug!(hero_power = config.hero_power, "duel created");
        Ok(Self {
            state,
            roster,
            hooks: SpeciesHooks::new(),
            queue: TaskQueue::new(),
            presenter,
        })
    }

    /// Create a duel with the classic lineup: three ducks for the sheriff,
    /// two lads for the bandit. Their enter-play hooks are queued.
    pub fn classic(config: DuelConfig, presenter: P) -> Result<Self, DuelError> {
        let mut duel = Self::new(config, presenter)?;
        let Roster { duck, lad, .. } = duel.roster;
        for _ in 0..3 {
            duel.summon(PlayerId::SHERIFF, duck)?;
        }
        for _ in 0..2 {
            duel.summon(PlayerId::BANDIT, lad)?;
        }
        Ok(duel)
    }

    /// The built-in species IDs.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game state, for registering extra species or setting up
    /// positions directly.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The mutable presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The task queue (its journal lists every step run so far).
    #[must_use]
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    /// Create a card of `species`, place it at the end of `player`'s board
    /// and queue its enter-play hooks.
    pub fn summon(&mut self, player: PlayerId, species: SpeciesId) -> Result<EntityId, DuelError> {
        let card = self.state.create_card(species, player)?;
        self.state.place(card)?;
        self.queue.push(Step::EnterPlay(card));
        Ok(card)
    }

    /// Queue an attack by the card at `position` on `player`'s board.
    ///
    /// Returns the attacker, or `None` when the slot is empty.
    pub fn attack_from(&mut self, player: PlayerId, position: usize) -> Option<EntityId> {
        let card = self.state.card_at(player, position)?;
        self.queue_attack(card);
        Some(card)
    }

    /// Queue an attack by every card on `player`'s board, left to right.
    ///
    /// Cards defeated before their turn comes are skipped. Returns the
    /// number of attacks queued.
    pub fn queue_turn(&mut self, player: PlayerId) -> usize {
        let board = self.state.board(player).clone();
        for &card in &board {
            self.queue_attack(card);
        }
        board.len()
    }

    /// Queue a card's leave-play hooks and its removal.
    pub fn withdraw(&mut self, card: EntityId) -> Result<(), DuelError> {
        if !self.state.is_on_board(card) {
            self.state.card(card)?;
            return Err(DuelError::NotInPlay(card));
        }
        self.queue.extend([Step::LeavePlay(card), Step::Remove(card)]);
        Ok(())
    }

    /// Run queued steps until done or until a cue needs acknowledging.
    pub fn run(&mut self) -> Result<ResolutionStatus, DuelError> {
        let mut context = ResolverContext::new(&self.hooks, &mut self.presenter);
        self.queue.process(&mut self.state, &mut context)
    }

    /// Acknowledge the pending cue and carry on.
    pub fn acknowledge(&mut self) -> Result<ResolutionStatus, DuelError> {
        self.queue.acknowledge()?;
        self.run()
    }

    /// Describe a card.
    pub fn describe(&self, card: EntityId) -> Result<Description, DuelError> {
        self.hooks.describe(&self.state, card)
    }

    /// Current power of a player's hero.
    #[must_use]
    pub fn hero_power(&self, player: PlayerId) -> i64 {
        self.state.hero_power(player)
    }

    fn queue_attack(&mut self, card: EntityId) {
        self.queue
            .extend([Step::BeforeAttack(card), Step::Attack(card), Step::Sweep]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Cue, Headless, Recorder, Shown};

    #[test]
    fn test_new_duel_sets_speed() {
        let duel = Duel::new(DuelConfig::default().with_speed_rate(3), Recorder::new()).unwrap();

        assert_eq!(duel.presenter().shown(), &[Shown::SpeedRate(3)]);
        assert_eq!(duel.state().species.len(), 7);
        assert!(duel.queue().is_complete());
    }

    #[test]
    fn test_classic_lineup() {
        let mut duel = Duel::classic(DuelConfig::default(), Headless).unwrap();
        assert_eq!(duel.run(), Ok(ResolutionStatus::Complete));

        assert_eq!(duel.state().board(PlayerId::SHERIFF).len(), 3);
        assert_eq!(duel.state().board(PlayerId::BANDIT).len(), 2);
        assert_eq!(duel.state().counters.get(duel.roster().lad), 2);
        assert!(duel.state().cards().all(|card| card.in_play));
    }

    #[test]
    fn test_attack_from_empty_slot() {
        let mut duel = Duel::new(DuelConfig::default(), Headless).unwrap();
        assert_eq!(duel.attack_from(PlayerId::SHERIFF, 0), None);
        assert!(duel.queue().is_complete());
    }

    #[test]
    fn test_single_strike_at_hero() {
        let mut duel = Duel::new(DuelConfig::default(), Recorder::new()).unwrap();
        let duck = duel.roster().duck;
        let card = duel.summon(PlayerId::SHERIFF, duck).unwrap();
        duel.attack_from(PlayerId::SHERIFF, 0);

        assert_eq!(duel.run(), Ok(ResolutionStatus::Complete));
        assert_eq!(duel.hero_power(PlayerId::BANDIT), 9);

        let cues: Vec<_> = duel.presenter().cues().cloned().collect();
        assert_eq!(
            cues,
            vec![
                Cue::ShowAttack(card),
                Cue::HeroDamage { player: PlayerId::BANDIT, amount: 1 },
            ]
        );
    }

    #[test]
    fn test_withdraw_requires_board() {
        let mut duel = Duel::new(DuelConfig::default(), Headless).unwrap();
        let lad = duel.roster().lad;
        let card = duel.summon(PlayerId::BANDIT, lad).unwrap();
        duel.run().unwrap();
        assert_eq!(duel.state().counters.get(lad), 1);

        duel.withdraw(card).unwrap();
        duel.run().unwrap();
        assert_eq!(duel.state().counters.get(lad), 0);
        assert!(!duel.state().is_on_board(card));

        assert_eq!(duel.withdraw(card), Err(DuelError::NotInPlay(card)));
        assert_eq!(duel.withdraw(EntityId(99)), Err(DuelError::UnknownCard(EntityId(99))));
    }
}
