//! Applying actions to the game state.
//!
//! Actions always act for `state.active_player`. Anything that does not
//! match the current state (a card id that is no longer in hand or on the
//! field, any action after the game ended) is ignored rather than treated
//! as an error: policies may act on slightly stale legal-action lists.
//!
//! Costs are not re-validated here. Only actions returned by
//! `legal_actions` are guaranteed to keep mana non-negative.

use log::{debug, trace};

use super::combat::{resolve_attack, CombatReport};
use super::turn::end_turn;
use crate::cards::CardSource;
use crate::core::{Action, CardId, EngineConfig, GameState, PlayerId};

/// Apply `action` for the active player.
///
/// Returns `true` if the action took effect, `false` if it was ignored.
pub fn apply_action<S: CardSource + ?Sized>(
    state: &mut GameState,
    action: &Action,
    config: &EngineConfig,
    cards: &mut S,
) -> bool {
    if state.winner.is_some() {
        debug!("ignoring {action}: game already won");
        return false;
    }

    let actor = state.active_player;
    trace!("{actor} applies {action}");

    let applied = match *action {
        Action::EndTurn => {
            state.record(format!("{actor} ends turn"));
            end_turn(state, config, cards);
            true
        }
        Action::PlayCard { card_id } => play_card(state, actor, card_id),
        Action::Attack { card_id } => match resolve_attack(state, actor, card_id) {
            Some(report) => {
                record_combat(state, actor, &report);
                true
            }
            None => false,
        },
    };

    if !applied {
        debug!("ignoring stale {action} for {actor}");
    }
    applied
}

/// Move the first hand card with `card_id` to the field, paying its cost.
fn play_card(state: &mut GameState, actor: PlayerId, card_id: CardId) -> bool {
    let player = state.player_mut(actor);
    let Some(pos) = player.hand_position(card_id) else {
        return false;
    };

    let card = player.hand.remove(pos);
    player.mana -= card.cost;
    let line = format!("{actor} plays {card}, {} mana left", player.mana);
    player.field.push(card);

    state.record(line);
    true
}

fn record_combat(state: &mut GameState, actor: PlayerId, report: &CombatReport) {
    let defender = actor.other();
    let attacker = report.attacker;

    match report.blocker {
        None => {
            state.record(format!(
                "{actor} {attacker} hits {defender} for {}",
                report.face_damage
            ));
        }
        Some(blocker) => {
            let opening = if report.quick_attack { "strikes first at" } else { "fights" };
            state.record(format!(
                "{actor} {attacker} {opening} {blocker}: deals {}, takes {}",
                report.damage_to_blocker, report.damage_to_attacker
            ));
            for popped in &report.barriers_popped {
                state.record(format!("{popped} barrier absorbs the hit"));
            }
            if report.overwhelm_excess > 0 {
                state.record(format!(
                    "{attacker} overwhelms {defender} for {}",
                    report.overwhelm_excess
                ));
            }
        }
    }

    if report.lethal {
        state.record(format!("{actor} wins"));
    }
}
