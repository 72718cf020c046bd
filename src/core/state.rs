//! Game state: players, zones, turn bookkeeping and the event log.
//!
//! ## PlayerState
//!
//! Per-side health, mana and the three card zones (hand, field,
//! graveyard). Zones are plain ordered vectors; field order is insertion
//! order and decides which unit blocks.
//!
//! ## GameState
//!
//! The whole-match snapshot. It carries no behavior beyond lookups and
//! logging; the rules live in `crate::rules`. The event log is an
//! `im::Vector` so cloning a snapshot stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::entity::CardId;
use super::player::{PlayerId, PlayerMap};
use crate::cards::Card;

/// Turn phase. Only `Main` exists today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Main,
}

/// One side's resources and zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,

    /// Current health. Face damage can take it below zero.
    pub health: i32,

    /// Health ceiling. No action in scope changes it.
    pub max_health: i32,

    /// Mana available this turn.
    pub mana: i32,

    /// Mana refilled at the start of this player's turn.
    pub max_mana: i32,

    /// Cards in hand, in draw order.
    pub hand: Vec<Card>,

    /// Cards in play, in insertion order.
    pub field: Vec<Card>,

    /// Cards removed from play.
    pub graveyard: Vec<Card>,
}

impl PlayerState {
    /// Fresh player with empty zones.
    #[must_use]
    pub fn new(id: PlayerId, health: i32, mana: i32) -> Self {
        Self {
            id,
            health,
            max_health: health,
            mana,
            max_mana: mana,
            hand: Vec::new(),
            field: Vec::new(),
            graveyard: Vec::new(),
        }
    }

    /// Position of the first hand card with this id.
    #[must_use]
    pub fn hand_position(&self, card_id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card_id)
    }

    /// Position of the first field card with this id.
    #[must_use]
    pub fn field_position(&self, card_id: CardId) -> Option<usize> {
        self.field.iter().position(|c| c.id == card_id)
    }

    /// First field card that can still block (health above zero).
    #[must_use]
    pub fn first_living_unit(&self) -> Option<usize> {
        self.field.iter().position(Card::is_alive)
    }
}

/// The full match snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Round counter, starts at 1 and advances when control returns to
    /// the primary side.
    pub turn: u32,

    /// Side that currently holds the turn.
    pub active_player: PlayerId,

    pub phase: Phase,

    pub players: PlayerMap<PlayerState>,

    /// Set exactly once; its presence ends the game.
    pub winner: Option<PlayerId>,

    /// Append-only human-readable events. No rule reads it.
    pub log: Vector<String>,
}

impl GameState {
    /// Empty-handed starting state: turn 1, primary side active.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            turn: 1,
            active_player: PlayerId::PRIMARY,
            phase: Phase::Main,
            players: PlayerMap::new(|id| {
                PlayerState::new(id, config.starting_health, config.starting_mana)
            }),
            winner: None,
            log: Vector::new(),
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    /// The side holding the turn.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        &self.players[self.active_player]
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Append an event to the log.
    pub fn record(&mut self, event: impl Into<String>) {
        self.log.push_back(event.into());
    }

    /// Find a card by id in any zone of either player.
    #[must_use]
    pub fn find_card(&self, card_id: CardId) -> Option<(PlayerId, &Card)> {
        self.players.iter().find_map(|(id, p)| {
            p.hand
                .iter()
                .chain(p.field.iter())
                .chain(p.graveyard.iter())
                .find(|c| c.id == card_id)
                .map(|c| (id, c))
        })
    }
}
