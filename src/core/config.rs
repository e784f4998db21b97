//! Duel configuration.
//!
//! A `DuelConfig` collects the tunable numbers of a duel: hero power,
//! animation speed, and the fixed amounts used by the built-in species.
//! It is plain data so hosts can load it from JSON or any other serde
//! format.
//!
//! ```
//! use duckdog_duel::core::DuelConfig;
//!
//! let config = DuelConfig::default()
//!     .with_hero_power(20)
//!     .with_volley_damage(3);
//!
//! assert_eq!(config.hero_power, 20);
//! assert_eq!(config.volley_damage, 3);
//! assert_eq!(config.armor, 1);
//! ```

use serde::{Deserialize, Serialize};

/// Tunable parameters of a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Starting power of each hero.
    pub hero_power: i64,

    /// Animation speed multiplier forwarded to the presenter.
    pub speed_rate: u32,

    /// Damage the Gatling deals to every opposing card.
    pub volley_damage: i64,

    /// Damage the Trasher shrugs off on every hit.
    pub armor: i64,

    /// Damage the default attack deals to a hero when the opposing slot is empty.
    pub hero_strike: i64,

    /// Maximum number of cards per board. `None` = unbounded.
    pub board_capacity: Option<usize>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            hero_power: 10,
            speed_rate: 1,
            volley_damage: 2,
            armor: 1,
            hero_strike: 1,
            board_capacity: None,
        }
    }
}

impl DuelConfig {
    /// Set the starting hero power (builder pattern).
    #[must_use]
    pub fn with_hero_power(mut self, power: i64) -> Self {
        self.hero_power = power;
        self
    }

    /// Set the animation speed multiplier (builder pattern).
    #[must_use]
    pub fn with_speed_rate(mut self, rate: u32) -> Self {
        self.speed_rate = rate;
        self
    }

    /// Set the Gatling's per-card damage (builder pattern).
    #[must_use]
    pub fn with_volley_damage(mut self, damage: i64) -> Self {
        self.volley_damage = damage;
        self
    }

    /// Set the Trasher's damage reduction (builder pattern).
    #[must_use]
    pub fn with_armor(mut self, armor: i64) -> Self {
        self.armor = armor;
        self
    }

    /// Limit the number of cards per board (builder pattern).
    #[must_use]
    pub fn with_board_capacity(mut self, capacity: usize) -> Self {
        self.board_capacity = Some(capacity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DuelConfig::default();
        assert_eq!(config.hero_power, 10);
        assert_eq!(config.speed_rate, 1);
        assert_eq!(config.volley_damage, 2);
        assert_eq!(config.armor, 1);
        assert_eq!(config.hero_strike, 1);
        assert_eq!(config.board_capacity, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DuelConfig = serde_json::from_str(r#"{"speed_rate": 4}"#).unwrap();
        assert_eq!(config.speed_rate, 4);
        assert_eq!(config.hero_power, 10);
    }

    #[test]
    fn test_serialization() {
        let config = DuelConfig::default().with_board_capacity(5).with_armor(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DuelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
