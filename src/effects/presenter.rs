//! Presentation boundary.
//!
//! The rules never draw anything themselves. They hand cues to a
//! `Presenter` and either carry on (`Ack::Done`) or park the task queue
//! until the host acknowledges the cue (`Ack::Deferred`), for example when
//! an animation has finished playing.

use serde::{Deserialize, Serialize};

use super::effect::Cue;
use crate::core::EntityId;

/// Answer of a presenter to a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ack {
    /// The cue is finished; continue immediately.
    Done,
    /// The host will acknowledge the cue later.
    Deferred,
}

/// Host-side view of the duel.
pub trait Presenter {
    /// Show a cue.
    fn present(&mut self, cue: &Cue) -> Ack;

    /// Redraw a card after its state changed.
    fn refresh(&mut self, card: EntityId);

    /// Animation speed multiplier.
    fn set_speed_rate(&mut self, _rate: u32) {}
}

/// Presenter that shows nothing and never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Presenter for Headless {
    fn present(&mut self, _cue: &Cue) -> Ack {
        Ack::Done
    }

    fn refresh(&mut self, _card: EntityId) {}
}

/// Something a `Recorder` saw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shown {
    /// A presented cue.
    Cue(Cue),
    /// A card refresh.
    Refresh(EntityId),
    /// A speed change.
    SpeedRate(u32),
}

/// Presenter that records everything it is shown.
///
/// With `deferring()` every cue is answered `Ack::Deferred`, which lets
/// tests walk a duel one acknowledgement at a time.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    shown: Vec<Shown>,
    defer: bool,
}

impl Recorder {
    /// A recorder that acknowledges every cue at once.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that defers every cue.
    #[must_use]
    pub fn deferring() -> Self {
        Self {
            shown: Vec::new(),
            defer: true,
        }
    }

    /// Everything recorded so far, in order.
    #[must_use]
    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }

    /// Recorded cues only, in order.
    pub fn cues(&self) -> impl Iterator<Item = &Cue> {
        self.shown.iter().filter_map(|shown| match shown {
            Shown::Cue(cue) => Some(cue),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.shown.clear();
    }
}

impl Presenter for Recorder {
    fn present(&mut self, cue: &Cue) -> Ack {
        self.shown.push(Shown::Cue(cue.clone()));
        if self.defer {
            Ack::Deferred
        } else {
            Ack::Done
        }
    }

    fn refresh(&mut self, card: EntityId) {
        self.shown.push(Shown::Refresh(card));
    }

    fn set_speed_rate(&mut self, rate: u32) {
        self.shown.push(Shown::SpeedRate(rate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut recorder = Recorder::new();

        recorder.set_speed_rate(2);
        assert_eq!(recorder.present(&Cue::ShowAttack(EntityId(1))), Ack::Done);
        recorder.refresh(EntityId(1));

        assert_eq!(
            recorder.shown(),
            &[
                Shown::SpeedRate(2),
                Shown::Cue(Cue::ShowAttack(EntityId(1))),
                Shown::Refresh(EntityId(1)),
            ]
        );
        assert_eq!(recorder.cues().count(), 1);
    }

    #[test]
    fn test_deferring_recorder() {
        let mut recorder = Recorder::deferring();
        assert_eq!(recorder.present(&Cue::SignalAbility(EntityId(3))), Ack::Deferred);
    }

    #[test]
    fn test_headless_never_waits() {
        let mut headless = Headless;
        headless.set_speed_rate(4);
        assert_eq!(headless.present(&Cue::ShowAttack(EntityId(0))), Ack::Done);
    }
}
