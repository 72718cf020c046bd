//! Engine configuration.
//!
//! The defaults are the standard rule set: 20 health, 1 starting
//! mana growing to 10, a 10-card hand, 4-card opening hands, generated
//! cards with stats in `1..=8` and no keywords, and a 100-step budget for
//! the opponent loop.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Inclusive range for a generated card stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: i32,
    pub max: i32,
}

impl StatRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Master seed. Every reset forks a new game stream from it.
    pub seed: u64,

    /// Starting (and maximum) health for both players.
    pub starting_health: i32,

    /// Starting mana and mana cap on turn 1.
    pub starting_mana: i32,

    /// Ceiling for `max_mana`.
    pub max_mana_cap: i32,

    /// Draws beyond this many cards in hand are dropped.
    pub hand_limit: usize,

    /// Cards dealt to each player on reset.
    pub initial_hand_size: usize,

    /// Cost range for generated cards.
    pub cost_range: StatRange,

    /// Attack range for generated cards.
    pub attack_range: StatRange,

    /// Health range for generated cards.
    pub health_range: StatRange,

    /// Probability that a generated card carries one random keyword.
    /// Zero keeps the generated deck vanilla.
    pub keyword_chance: f64,

    /// Maximum actions the opponent loop takes before giving up.
    pub opponent_step_budget: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_health: 20,
            starting_mana: 1,
            max_mana_cap: 10,
            hand_limit: 10,
            initial_hand_size: 4,
            cost_range: StatRange::new(1, 8),
            attack_range: StatRange::new(1, 8),
            health_range: StatRange::new(1, 8),
            keyword_chance: 0.0,
            opponent_step_budget: 100,
        }
    }
}

impl EngineConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set starting health.
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the hand limit.
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the opening hand size.
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the chance that generated cards carry a keyword.
    pub fn with_keyword_chance(mut self, chance: f64) -> Self {
        self.keyword_chance = chance;
        self
    }

    /// Set the opponent loop step budget.
    pub fn with_opponent_step_budget(mut self, budget: u32) -> Self {
        self.opponent_step_budget = budget;
        self
    }

    /// Check the configuration for values the rules cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (stat, range) in [
            ("cost", self.cost_range),
            ("attack", self.attack_range),
            ("health", self.health_range),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyStatRange {
                    stat,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.cost_range.min < 0 {
            return Err(ConfigError::NegativeCost(self.cost_range.min));
        }
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.starting_health));
        }
        if self.max_mana_cap < self.starting_mana {
            return Err(ConfigError::ManaCapBelowStart {
                starting: self.starting_mana,
                cap: self.max_mana_cap,
            });
        }
        if self.hand_limit == 0 {
            return Err(ConfigError::ZeroHandLimit);
        }
        if self.initial_hand_size > self.hand_limit {
            return Err(ConfigError::InitialHandTooLarge {
                size: self.initial_hand_size,
                limit: self.hand_limit,
            });
        }
        if !(0.0..=1.0).contains(&self.keyword_chance) {
            return Err(ConfigError::KeywordChanceOutOfRange(self.keyword_chance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();

        assert_eq!(config.starting_health, 20);
        assert_eq!(config.max_mana_cap, 10);
        assert_eq!(config.hand_limit, 10);
        assert_eq!(config.initial_hand_size, 4);
        assert_eq!(config.opponent_step_budget, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_seed(7)
            .with_starting_health(30)
            .with_hand_limit(5)
            .with_initial_hand_size(2)
            .with_keyword_chance(0.5)
            .with_opponent_step_budget(10);

        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.hand_limit, 5);
        assert_eq!(config.initial_hand_size, 2);
        assert_eq!(config.opponent_step_budget, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut config = EngineConfig::default();
        config.attack_range = StatRange::new(5, 1);

        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyStatRange { stat: "attack", min: 5, max: 1 })
        );
    }

    #[test]
    fn test_oversized_opening_hand_rejected() {
        let config = EngineConfig::default()
            .with_hand_limit(3)
            .with_initial_hand_size(4);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialHandTooLarge { size: 4, limit: 3 })
        );
    }

    #[test]
    fn test_bad_scalars_rejected() {
        assert!(EngineConfig::default().with_starting_health(0).validate().is_err());
        assert!(EngineConfig::default().with_hand_limit(0).validate().is_err());
        assert!(EngineConfig::default().with_keyword_chance(1.5).validate().is_err());

        let mut config = EngineConfig::default();
        config.max_mana_cap = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ManaCapBelowStart { starting: 1, cap: 0 })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
