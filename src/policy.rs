//! Action-selection policies for sides that act without external input.
//!
//! A policy sees the state and the ordered legal actions and returns an
//! index into that list. Policies are trait-based so callers can plug in
//! heuristics or learned models; any `FnMut` with the right shape is a
//! policy too.

use crate::core::{Action, GameRng, GameState};

/// Chooses one of the legal actions.
pub trait OpponentPolicy {
    /// Pick an index into `actions`, or `None` to decline.
    ///
    /// `actions` is never empty when called by the opponent loop.
    fn choose(&mut self, state: &GameState, actions: &[Action], rng: &mut GameRng) -> Option<usize>;
}

impl<F> OpponentPolicy for F
where
    F: FnMut(&GameState, &[Action], &mut GameRng) -> Option<usize>,
{
    fn choose(&mut self, state: &GameState, actions: &[Action], rng: &mut GameRng) -> Option<usize> {
        self(state, actions, rng)
    }
}

/// Uniform random choice. The default opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl OpponentPolicy for UniformPolicy {
    fn choose(&mut self, _state: &GameState, actions: &[Action], rng: &mut GameRng) -> Option<usize> {
        if actions.is_empty() {
            return None;
        }
        Some(rng.gen_index(actions.len()))
    }
}

/// Always ends the turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassivePolicy;

impl OpponentPolicy for PassivePolicy {
    fn choose(&mut self, _state: &GameState, actions: &[Action], _rng: &mut GameRng) -> Option<usize> {
        actions.iter().position(Action::is_end_turn)
    }
}

/// Attack whenever possible, otherwise play a card, otherwise end the turn.
///
/// Units may attack any number of times, so this keeps attacking until the
/// game ends or the opponent loop's step budget runs out.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressivePolicy;

impl OpponentPolicy for AggressivePolicy {
    fn choose(&mut self, _state: &GameState, actions: &[Action], _rng: &mut GameRng) -> Option<usize> {
        actions
            .iter()
            .position(Action::is_attack)
            .or_else(|| actions.iter().position(Action::is_play))
            .or_else(|| actions.iter().position(Action::is_end_turn))
    }
}
