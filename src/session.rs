//! Step-based session for training loops.
//!
//! A `Session` pairs an `Engine` with an opponent policy so a learner only
//! ever acts for the primary side. Each `step` applies one primary action,
//! lets the opponent play until control returns, and reports a shaped
//! reward.
//!
//! ## Reward
//!
//! - `win_reward` when the primary side wins, `loss_reward` when it loses
//! - plus `(health - starting_health) * health_shaping` on every step

use log::debug;

use crate::core::{Action, ConfigError, EngineConfig, GameState, PlayerId};
use crate::driver::{run_until_control_returns, LoopReport};
use crate::engine::Engine;
use crate::policy::{OpponentPolicy, UniformPolicy};

/// Reward shaping and episode limits.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub win_reward: f64,
    pub loss_reward: f64,
    pub health_shaping: f64,
    /// Truncate after this many primary steps. `None` means unlimited.
    pub max_episode_steps: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            win_reward: 10.0,
            loss_reward: -10.0,
            health_shaping: 0.05,
            max_episode_steps: None,
        }
    }
}

impl SessionConfig {
    pub fn with_rewards(mut self, win: f64, loss: f64) -> Self {
        self.win_reward = win;
        self.loss_reward = loss;
        self
    }

    pub fn with_health_shaping(mut self, weight: f64) -> Self {
        self.health_shaping = weight;
        self
    }

    pub fn with_max_episode_steps(mut self, steps: u32) -> Self {
        self.max_episode_steps = Some(steps);
        self
    }
}

/// Result of one `Session::step`.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    /// The primary action taken, if any was legal.
    pub applied: Option<Action>,
    /// How the opponent's reply ended.
    pub opponent: LoopReport,
    /// Primary legal actions for the next step.
    pub legal_actions: Vec<Action>,
}

/// An engine plus an opponent, stepped from the primary side.
pub struct Session {
    engine: Engine,
    policy: Box<dyn OpponentPolicy + Send>,
    config: SessionConfig,
    steps: u32,
}

impl Session {
    pub fn new(
        engine_config: EngineConfig,
        policy: Box<dyn OpponentPolicy + Send>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::new(engine_config)?,
            policy,
            config: SessionConfig::default(),
            steps: 0,
        })
    }

    /// Wrap an existing engine, keeping its current game.
    pub fn from_engine(engine: Engine, policy: Box<dyn OpponentPolicy + Send>) -> Self {
        Self {
            engine,
            policy,
            config: SessionConfig::default(),
            steps: 0,
        }
    }

    /// A session against `UniformPolicy`.
    pub fn uniform(engine_config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(engine_config, Box::new(UniformPolicy))
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal a new game and return the primary side's legal actions.
    pub fn reset(&mut self) -> Vec<Action> {
        self.engine.reset();
        self.steps = 0;
        self.engine.legal_actions(PlayerId::PRIMARY)
    }

    /// Play `action_index` (wrapped into the legal range) for the primary
    /// side, then let the opponent respond.
    ///
    /// With no primary actions available (finished game, or an opponent
    /// that still holds the turn) only the opponent loop runs.
    pub fn step(&mut self, action_index: usize) -> StepOutcome {
        let legal = self.engine.legal_actions(PlayerId::PRIMARY);
        let applied = if legal.is_empty() {
            None
        } else {
            let action = legal[action_index % legal.len()];
            self.engine.apply(&action);
            Some(action)
        };
        self.steps += 1;

        let opponent = run_until_control_returns(&mut self.engine, &mut *self.policy);

        let terminated = self.engine.is_terminal();
        let truncated = !terminated
            && self.config.max_episode_steps.is_some_and(|max| self.steps >= max);
        let reward = self.reward();
        debug!(
            "step {}: {applied:?}, opponent {:?}, reward {reward:.2}",
            self.steps, opponent.outcome
        );

        StepOutcome {
            reward,
            terminated,
            truncated,
            applied,
            opponent,
            legal_actions: self.engine.legal_actions(PlayerId::PRIMARY),
        }
    }

    fn reward(&self) -> f64 {
        let outcome = match self.engine.winner() {
            Some(w) if w.is_primary() => self.config.win_reward,
            Some(_) => self.config.loss_reward,
            None => 0.0,
        };
        let me = self.engine.state().player(PlayerId::PRIMARY);
        let delta = me.health - self.engine.config().starting_health;
        outcome + f64::from(delta) * self.config.health_shaping
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Primary steps taken since the last reset.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
