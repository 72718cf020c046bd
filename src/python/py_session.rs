//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, PlayerId};
use crate::policy::{AggressivePolicy, OpponentPolicy, PassivePolicy, UniformPolicy};
use crate::session::{Session, SessionConfig};

use super::py_core::{PyAction, PyCard, PyPlayerId};

fn opponent_by_name(name: &str) -> PyResult<Box<dyn OpponentPolicy + Send>> {
    match name {
        "uniform" => Ok(Box::new(UniformPolicy)),
        "passive" => Ok(Box::new(PassivePolicy)),
        "aggressive" => Ok(Box::new(AggressivePolicy)),
        other => Err(PyValueError::new_err(format!(
            "unknown opponent {other:?}, expected uniform, passive or aggressive"
        ))),
    }
}

fn wrap(actions: Vec<crate::core::Action>) -> Vec<PyAction> {
    actions.into_iter().map(PyAction).collect()
}

/// Python wrapper for Session.
///
/// The learner always plays the primary side; the named opponent replies
/// inside each `step`.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - starting_health: Starting health for both sides
    /// - hand_limit: Draws are dropped at this hand size
    /// - initial_hand_size: Cards dealt to each side at reset
    /// - keyword_chance: Probability a generated card gets a keyword
    /// - opponent: "uniform", "passive" or "aggressive"
    /// - max_episode_steps: Truncate after this many steps (None = never)
    #[new]
    #[pyo3(signature = (
        seed = 42,
        starting_health = 20,
        hand_limit = 10,
        initial_hand_size = 4,
        keyword_chance = 0.0,
        opponent = "uniform",
        max_episode_steps = None
    ))]
    fn new(
        seed: u64,
        starting_health: i32,
        hand_limit: usize,
        initial_hand_size: usize,
        keyword_chance: f64,
        opponent: &str,
        max_episode_steps: Option<u32>,
    ) -> PyResult<Self> {
        let config = EngineConfig::new()
            .with_seed(seed)
            .with_starting_health(starting_health)
            .with_hand_limit(hand_limit)
            .with_initial_hand_size(initial_hand_size)
            .with_keyword_chance(keyword_chance);

        let mut session_config = SessionConfig::default();
        session_config.max_episode_steps = max_episode_steps;

        let inner = Session::new(config, opponent_by_name(opponent)?)
            .map_err(|e| PyValueError::new_err(e.to_string()))?
            .with_config(session_config);
        Ok(Self { inner })
    }

    /// Deal a new game. Returns the learner's legal actions.
    fn reset(&mut self) -> Vec<PyAction> {
        wrap(self.inner.reset())
    }

    /// Legal actions for the learner right now.
    fn legal_actions(&self) -> Vec<PyAction> {
        wrap(self.inner.engine().legal_actions(PlayerId::PRIMARY))
    }

    /// Take one step. Returns (reward, terminated, truncated, legal_actions).
    fn step(&mut self, action_index: usize) -> (f64, bool, bool, Vec<PyAction>) {
        let out = self.inner.step(action_index);
        (out.reward, out.terminated, out.truncated, wrap(out.legal_actions))
    }

    #[getter]
    fn turn(&self) -> u32 {
        self.inner.state().turn
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.inner.state().active_player)
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.inner.engine().winner().map(PyPlayerId)
    }

    #[getter]
    fn steps(&self) -> u32 {
        self.inner.steps()
    }

    fn health(&self, player: &PyPlayerId) -> i32 {
        self.inner.state().player(player.0).health
    }

    fn mana(&self, player: &PyPlayerId) -> (i32, i32) {
        let p = self.inner.state().player(player.0);
        (p.mana, p.max_mana)
    }

    /// The learner's hand. The opponent's hand is hidden.
    fn hand(&self) -> Vec<PyCard> {
        self.inner
            .state()
            .player(PlayerId::PRIMARY)
            .hand
            .iter()
            .cloned()
            .map(PyCard)
            .collect()
    }

    fn field(&self, player: &PyPlayerId) -> Vec<PyCard> {
        self.inner.state().player(player.0).field.iter().cloned().map(PyCard).collect()
    }

    /// Human-readable event log for the current game.
    fn log(&self) -> Vec<String> {
        self.inner.state().log.iter().cloned().collect()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        let status = match state.winner {
            Some(w) => format!("won by {w}"),
            None => "ongoing".to_string(),
        };
        format!(
            "Session(turn={}, active={}, status={status})",
            state.turn, state.active_player
        )
    }
}
