//! Core engine types: ids, players, state, actions, RNG, configuration.
//!
//! Everything here is data. The rules that move a `GameState` forward
//! live in `crate::rules`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;
pub mod view;

pub use entity::{CardId, IdAllocator};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{EngineConfig, StatRange};
pub use error::ConfigError;
pub use action::Action;
pub use state::{GameState, Phase, PlayerState};
pub use view::{OpponentView, PlayerView};
