//! End-of-turn bookkeeping.

use log::trace;

use crate::cards::CardSource;
use crate::core::{EngineConfig, GameState};

/// Hand control to the other side.
///
/// - The turn counter advances only when control returns to the primary side.
/// - The new active player's mana cap becomes `min(max_mana_cap, turn)`
///   (never lowered) and mana is refilled to the cap.
/// - The new active player draws one fresh card unless the hand is at the
///   limit, in which case the draw is dropped.
///
/// Does not check for a winner; `apply_action` guards that.
pub fn end_turn<S: CardSource + ?Sized>(state: &mut GameState, config: &EngineConfig, cards: &mut S) {
    let next = state.active_player.other();
    state.active_player = next;
    if next.is_primary() {
        state.turn += 1;
    }

    let turn = state.turn;
    let cap = config.max_mana_cap;
    let player = state.player_mut(next);
    // Turn counts far past the cap saturate instead of overflowing.
    let mana_cap = i32::try_from(turn).map_or(cap, |t| t.min(cap));
    player.max_mana = player.max_mana.max(mana_cap);
    player.mana = player.max_mana;

    let drawn = if player.hand.len() < config.hand_limit {
        let card = cards.next_card();
        let id = card.id;
        player.hand.push(card);
        Some(id)
    } else {
        None
    };

    trace!("turn {turn}: {next} active, mana {mana_cap}, drew {drawn:?}");
    state.record(format!("turn {turn}: {next} to act with {mana_cap} mana"));
    match drawn {
        Some(id) => state.record(format!("{next} draws {id}")),
        None => state.record(format!("{next} hand full, draw dropped")),
    }
}
