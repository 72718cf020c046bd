//! Legal-action enumeration.
//!
//! Only the active player ever has actions, and none exist once a winner
//! is set. The order is fixed (end turn, playable hand cards in hand
//! order, attackers in field order) because policies pick by index.

use crate::core::{Action, GameState, PlayerId};

/// Every action `player` may take right now, in deterministic order.
///
/// Units on the field may attack any number of times per turn and
/// regardless of when they were played; there is no summoning sickness.
#[must_use]
pub fn legal_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
    if state.winner.is_some() || state.active_player != player {
        return Vec::new();
    }

    let me = state.player(player);
    let mut actions = Vec::with_capacity(1 + me.hand.len() + me.field.len());

    actions.push(Action::EndTurn);

    actions.extend(
        me.hand
            .iter()
            .filter(|card| card.cost <= me.mana)
            .map(|card| Action::PlayCard { card_id: card.id }),
    );

    actions.extend(me.field.iter().map(|card| Action::Attack { card_id: card.id }));

    actions
}

/// Whether `action` is currently in `player`'s legal set.
#[must_use]
pub fn is_legal(state: &GameState, player: PlayerId, action: &Action) -> bool {
    legal_actions(state, player).contains(action)
}
