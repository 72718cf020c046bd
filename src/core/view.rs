//! Perspective snapshots.
//!
//! A `PlayerView` is what one side may observe: its own state in full,
//! and the opponent's public information only (hand contents hidden,
//! hand size shown). Encoders that must not peek at hidden cards should
//! build from this instead of the raw `GameState`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::{GameState, PlayerState};
use crate::cards::Card;

/// Public information about the other side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub id: PlayerId,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub hand_size: usize,
    pub field: Vec<Card>,
    pub graveyard_size: usize,
}

impl From<&PlayerState> for OpponentView {
    fn from(p: &PlayerState) -> Self {
        Self {
            id: p.id,
            health: p.health,
            max_health: p.max_health,
            mana: p.mana,
            max_mana: p.max_mana,
            hand_size: p.hand.len(),
            field: p.field.clone(),
            graveyard_size: p.graveyard.len(),
        }
    }
}

/// Snapshot of the game from one side's seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub perspective: PlayerId,
    pub turn: u32,
    pub active_player: PlayerId,
    pub me: PlayerState,
    pub opponent: OpponentView,
    pub winner: Option<PlayerId>,
}

impl PlayerView {
    #[must_use]
    pub fn new(state: &GameState, perspective: PlayerId) -> Self {
        Self {
            perspective,
            turn: state.turn,
            active_player: state.active_player,
            me: state.player(perspective).clone(),
            opponent: OpponentView::from(state.player(perspective.other())),
            winner: state.winner,
        }
    }

    /// Whether it is this side's turn.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.active_player == self.perspective
    }
}
