//! Engine errors.
//!
//! Rules-level problems (stale card ids, actions after the game ended) are
//! never errors: they are absorbed as no-ops. The only fallible surface is
//! building an engine from an invalid configuration or starting state.

use thiserror::Error;

use super::entity::CardId;

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{stat} range is empty: {min}..={max}")]
    EmptyStatRange {
        stat: &'static str,
        min: i32,
        max: i32,
    },

    #[error("card cost range must be non-negative, got minimum {0}")]
    NegativeCost(i32),

    #[error("starting health must be positive, got {0}")]
    NonPositiveHealth(i32),

    #[error("mana cap must be at least the starting mana ({starting}), got {cap}")]
    ManaCapBelowStart { starting: i32, cap: i32 },

    #[error("hand limit must be at least 1")]
    ZeroHandLimit,

    #[error("initial hand size {size} exceeds hand limit {limit}")]
    InitialHandTooLarge { size: usize, limit: usize },

    #[error("keyword chance must be within [0, 1], got {0}")]
    KeywordChanceOutOfRange(f64),

    #[error("no card ids left above {0}")]
    IdSpaceExhausted(CardId),
}
