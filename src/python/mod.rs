//! Python bindings for the rift-sim engine.
//!
//! # Quick Start
//!
//! ```python
//! import rift_sim
//!
//! session = rift_sim.Session(seed=42, opponent="uniform")
//! legal = session.reset()
//!
//! while True:
//!     reward, terminated, truncated, legal = session.step(0)
//!     if terminated or truncated:
//!         break
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rift_sim: a deterministic card-battle simulator.
///
/// This module provides:
/// - Core types (PlayerId, Action, Card)
/// - A stepped Session with a built-in opponent
#[pymodule]
fn rift_sim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyCard>()?;

    // Sessions
    m.add_class::<PySession>()?;

    Ok(())
}
