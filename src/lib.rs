//! # rift-sim
//!
//! A deterministic two-player card-battle simulator for RL training.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows from one seed through
//!    `GameRng` streams. The same seed and action sequence always produce
//!    the same game.
//!
//! 2. **Closed rule set**: Actions and keywords are closed enums, matched
//!    exhaustively. Adding a keyword is a compile error until combat
//!    handles it.
//!
//! 3. **No global state**: One `Engine` per match. Parallel matches use
//!    independent engines.
//!
//! ## Modules
//!
//! - `core`: Players, card ids, RNG, configuration, actions, state, views
//! - `cards`: Card data, keywords and card generation
//! - `rules`: Legal-action enumeration, action application, combat, turns
//! - `engine`: The per-match facade
//! - `policy`: Opponent policies
//! - `driver`: The opponent loop
//! - `session`: Reward-shaped stepping for training loops

pub mod core;
pub mod cards;
pub mod rules;
pub mod engine;
pub mod policy;
pub mod driver;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, CardId, ConfigError, EngineConfig, GameRng, GameState, IdAllocator,
    OpponentView, Phase, PlayerId, PlayerMap, PlayerState, PlayerView, StatRange,
};

pub use crate::cards::{Card, CardFactory, CardSource, Keyword, Keywords, ScriptedCards};

pub use crate::rules::{apply_action, end_turn, is_legal, legal_actions, resolve_attack, CombatReport};

pub use crate::engine::Engine;

pub use crate::policy::{AggressivePolicy, OpponentPolicy, PassivePolicy, UniformPolicy};

pub use crate::driver::{run_until_control_returns, LoopOutcome, LoopReport};

pub use crate::session::{Session, SessionConfig, StepOutcome};
