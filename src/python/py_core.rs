//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{Action, CardId, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Parse "player" or "opponent".
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        name.parse().map(Self).map_err(PyValueError::new_err)
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.as_str()
    }

    #[getter]
    fn is_primary(&self) -> bool {
        self.0.is_primary()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    #[staticmethod]
    fn end_turn() -> Self {
        Self(Action::EndTurn)
    }

    #[staticmethod]
    fn play_card(card_id: u32) -> Self {
        Self(Action::PlayCard { card_id: CardId(card_id) })
    }

    #[staticmethod]
    fn attack(card_id: u32) -> Self {
        Self(Action::Attack { card_id: CardId(card_id) })
    }

    /// "END_TURN", "PLAY_CARD" or "ATTACK".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Action::EndTurn => "END_TURN",
            Action::PlayCard { .. } => "PLAY_CARD",
            Action::Attack { .. } => "ATTACK",
        }
    }

    /// The referenced card, or None for END_TURN.
    #[getter]
    fn card_id(&self) -> Option<u32> {
        self.0.card_id().map(CardId::raw)
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Read-only snapshot of a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn cost(&self) -> i32 {
        self.0.cost
    }

    #[getter]
    fn attack(&self) -> i32 {
        self.0.attack
    }

    #[getter]
    fn health(&self) -> i32 {
        self.0.health
    }

    /// Keyword display names, e.g. ["Quick Attack"].
    #[getter]
    fn keywords(&self) -> Vec<&'static str> {
        self.0.keywords.iter().map(|k| k.name()).collect()
    }

    #[getter]
    fn barrier_active(&self) -> bool {
        self.0.barrier_active()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }
}
