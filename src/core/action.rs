//! Action representation.
//!
//! Actions form a closed set: ending the turn, playing a card from hand,
//! or attacking with a card on the field. Card-bearing actions reference
//! the card by id only; the applier resolves the id against the current
//! state and ignores references that no longer match anything.

use serde::{Deserialize, Serialize};

use super::entity::CardId;

/// A single player action.
///
/// ```
/// use rift_sim::core::{Action, CardId};
///
/// let play = Action::PlayCard { card_id: CardId(7) };
/// assert_eq!(play.card_id(), Some(CardId(7)));
/// assert_eq!(Action::EndTurn.card_id(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Pass control to the other side.
    EndTurn,
    /// Move a card from hand to field, paying its cost.
    PlayCard { card_id: CardId },
    /// Attack with a card on the field.
    Attack { card_id: CardId },
}

impl Action {
    /// The card this action refers to, if any.
    #[must_use]
    pub const fn card_id(&self) -> Option<CardId> {
        match self {
            Action::EndTurn => None,
            Action::PlayCard { card_id } | Action::Attack { card_id } => Some(*card_id),
        }
    }

    #[must_use]
    pub const fn is_end_turn(&self) -> bool {
        matches!(self, Action::EndTurn)
    }

    #[must_use]
    pub const fn is_play(&self) -> bool {
        matches!(self, Action::PlayCard { .. })
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::EndTurn => f.write_str("END_TURN"),
            Action::PlayCard { card_id } => write!(f, "PLAY_CARD({card_id})"),
            Action::Attack { card_id } => write!(f, "ATTACK({card_id})"),
        }
    }
}
