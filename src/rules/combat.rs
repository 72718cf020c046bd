//! Combat resolution for a single attack.
//!
//! ## Blocking
//!
//! The defender never chooses: the first unit on the defending field with
//! health above zero blocks. With no living unit the attack hits face.
//!
//! ## Strikes
//!
//! - **Quick Attack**: the attacker strikes first; the blocker strikes
//!   back only if it is still alive.
//! - Otherwise both strike simultaneously with their pre-combat attack.
//!
//! A live barrier absorbs one strike completely and is consumed.
//!
//! ## Overwhelm
//!
//! If the attacker has Overwhelm and the blocker ends below zero health,
//! the overflow is dealt to the defending player and the blocker is set to
//! exactly zero. Overflow damage never ends the game; only a direct face
//! hit checks for lethal.
//!
//! Units at or below zero health are not removed from the field.

use smallvec::SmallVec;

use crate::cards::{Card, Keyword};
use crate::core::{CardId, GameState, PlayerId};

/// What happened during one attack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatReport {
    pub attacker: CardId,
    /// Unit that blocked, if any.
    pub blocker: Option<CardId>,
    /// Whether the attacker struck first.
    pub quick_attack: bool,
    /// Damage taken by the blocker (zero if absorbed).
    pub damage_to_blocker: i32,
    /// Damage taken by the attacker (zero if absorbed or no retaliation).
    pub damage_to_attacker: i32,
    /// Whether the blocker got to strike back.
    pub blocker_struck: bool,
    /// Units whose barrier absorbed a strike, in strike order.
    pub barriers_popped: SmallVec<[CardId; 2]>,
    /// Unblocked damage to the defending player.
    pub face_damage: i32,
    /// Overwhelm overflow dealt to the defending player.
    pub overwhelm_excess: i32,
    /// Whether the face hit reduced the defender to zero or below.
    pub lethal: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct StrikeTraits {
    quick_attack: bool,
    overwhelm: bool,
}

impl StrikeTraits {
    fn of(card: &Card) -> Self {
        let mut traits = Self::default();
        for kw in card.keywords.iter() {
            match kw {
                Keyword::QuickAttack => traits.quick_attack = true,
                Keyword::Overwhelm => traits.overwhelm = true,
                // Barrier is defensive; it is handled by `Card::take_hit`.
                Keyword::Barrier => {}
            }
        }
        traits
    }
}

/// One strike against `target`, recording a popped barrier.
fn strike(target: &mut Card, damage: i32, popped: &mut SmallVec<[CardId; 2]>) -> i32 {
    match target.take_hit(damage) {
        Some(taken) => taken,
        None => {
            popped.push(target.id);
            0
        }
    }
}

/// Resolve an attack by `attacker_owner`'s unit `card_id`.
///
/// Returns `None` (and leaves the state untouched) if the unit is not on
/// its owner's field. Sets `state.winner` on a lethal face hit.
pub fn resolve_attack(
    state: &mut GameState,
    attacker_owner: PlayerId,
    card_id: CardId,
) -> Option<CombatReport> {
    let (offense, defense) = state.players.pair_mut(attacker_owner);
    let attacker_idx = offense.field_position(card_id)?;

    let mut report = CombatReport {
        attacker: card_id,
        ..CombatReport::default()
    };

    match defense.first_living_unit() {
        None => {
            let damage = offense.field[attacker_idx].attack;
            defense.health = defense.health.saturating_sub(damage);
            report.face_damage = damage;
            report.lethal = defense.health <= 0;
        }
        Some(blocker_idx) => {
            let attacker = &mut offense.field[attacker_idx];
            let blocker = &mut defense.field[blocker_idx];
            let traits = StrikeTraits::of(attacker);

            report.blocker = Some(blocker.id);
            report.quick_attack = traits.quick_attack;

            let attack_power = attacker.attack;
            let block_power = blocker.attack;

            report.damage_to_blocker = strike(blocker, attack_power, &mut report.barriers_popped);

            if !traits.quick_attack || blocker.is_alive() {
                report.damage_to_attacker = strike(attacker, block_power, &mut report.barriers_popped);
                report.blocker_struck = true;
            }

            if traits.overwhelm && blocker.health < 0 {
                let excess = blocker.health.saturating_neg();
                blocker.health = 0;
                defense.health = defense.health.saturating_sub(excess);
                report.overwhelm_excess = excess;
            }
        }
    }

    if report.lethal {
        state.winner = Some(attacker_owner);
    }

    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;

    fn board(attacker: Card, blockers: Vec<Card>) -> GameState {
        let mut state = GameState::new(&EngineConfig::default());
        state.player_mut(PlayerId::Player).field.push(attacker);
        state.player_mut(PlayerId::Opponent).field = blockers;
        state
    }

    fn attacker(state: &GameState) -> &Card {
        &state.player(PlayerId::Player).field[0]
    }

    fn blocker(state: &GameState, idx: usize) -> &Card {
        &state.player(PlayerId::Opponent).field[idx]
    }

    #[test]
    fn test_missing_attacker_is_noop() {
        let mut state = board(Card::vanilla(CardId(1), 1, 3, 3), vec![]);
        let before = state.clone();

        assert!(resolve_attack(&mut state, PlayerId::Player, CardId(99)).is_none());
        // Card exists, but on the other side.
        assert!(resolve_attack(&mut state, PlayerId::Opponent, CardId(1)).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_face_damage_not_lethal() {
        let mut state = board(Card::vanilla(CardId(1), 1, 3, 3), vec![]);

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.face_damage, 3);
        assert!(!report.lethal);
        assert_eq!(state.player(PlayerId::Opponent).health, 17);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_face_damage_lethal() {
        let mut state = board(Card::vanilla(CardId(1), 1, 5, 1), vec![]);
        state.player_mut(PlayerId::Opponent).health = 5;

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert!(report.lethal);
        assert_eq!(state.player(PlayerId::Opponent).health, 0);
        assert_eq!(state.winner, Some(PlayerId::Player));
    }

    #[test]
    fn test_dead_units_do_not_block() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 2, 2),
            vec![Card::vanilla(CardId(2), 1, 9, 0), Card::vanilla(CardId(3), 1, 9, -1)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.blocker, None);
        assert_eq!(report.face_damage, 2);
        assert_eq!(attacker(&state).health, 2);
    }

    #[test]
    fn test_first_living_unit_blocks() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 2, 5),
            vec![
                Card::vanilla(CardId(2), 1, 1, 0),
                Card::vanilla(CardId(3), 1, 1, 4),
                Card::vanilla(CardId(4), 1, 1, 4),
            ],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.blocker, Some(CardId(3)));
        assert_eq!(blocker(&state, 1).health, 2);
        assert_eq!(blocker(&state, 2).health, 4);
    }

    #[test]
    fn test_simultaneous_strike() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 3, 2),
            vec![Card::vanilla(CardId(2), 1, 4, 3)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert!(report.blocker_struck);
        assert_eq!(attacker(&state).health, -2);
        assert_eq!(blocker(&state, 0).health, 0);
        assert_eq!(state.player(PlayerId::Opponent).health, 20);
        // Dead units stay where they are.
        assert_eq!(state.player(PlayerId::Player).field.len(), 1);
        assert_eq!(state.player(PlayerId::Opponent).field.len(), 1);
        assert!(state.player(PlayerId::Opponent).graveyard.is_empty());
    }

    #[test]
    fn test_simultaneous_barriers_independent() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 3, 2).with_keyword(Keyword::Barrier),
            vec![Card::vanilla(CardId(2), 1, 4, 3)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.barriers_popped.as_slice(), &[CardId(1)]);
        assert_eq!(attacker(&state).health, 2);
        assert!(!attacker(&state).barrier_active());
        assert_eq!(blocker(&state, 0).health, 0);
    }

    #[test]
    fn test_quick_attack_kill_prevents_retaliation() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 5, 2).with_keyword(Keyword::QuickAttack),
            vec![Card::vanilla(CardId(2), 1, 5, 3)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert!(report.quick_attack);
        assert!(!report.blocker_struck);
        assert!(blocker(&state, 0).health <= 0);
        assert_eq!(attacker(&state).health, 2);
    }

    #[test]
    fn test_quick_attack_into_barrier_gets_retaliation() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 5, 4).with_keyword(Keyword::QuickAttack),
            vec![Card::vanilla(CardId(2), 1, 3, 2).with_keyword(Keyword::Barrier)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.barriers_popped.as_slice(), &[CardId(2)]);
        assert!(report.blocker_struck);
        assert_eq!(blocker(&state, 0).health, 2);
        assert_eq!(attacker(&state).health, 1);
    }

    #[test]
    fn test_quick_attack_survivor_hits_attacker_barrier() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 1, 1)
                .with_keyword(Keyword::QuickAttack)
                .with_keyword(Keyword::Barrier),
            vec![Card::vanilla(CardId(2), 1, 6, 6)],
        );

        resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(blocker(&state, 0).health, 5);
        assert_eq!(attacker(&state).health, 1);
        assert!(!attacker(&state).barrier_active());
    }

    #[test]
    fn test_overwhelm_overflow() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 10, 10).with_keyword(Keyword::Overwhelm),
            vec![Card::vanilla(CardId(2), 1, 1, 4)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.overwhelm_excess, 6);
        assert_eq!(blocker(&state, 0).health, 0);
        assert_eq!(state.player(PlayerId::Opponent).health, 14);
    }

    #[test]
    fn test_overwhelm_exact_kill_has_no_overflow() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 4, 10).with_keyword(Keyword::Overwhelm),
            vec![Card::vanilla(CardId(2), 1, 1, 4)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.overwhelm_excess, 0);
        assert_eq!(blocker(&state, 0).health, 0);
        assert_eq!(state.player(PlayerId::Opponent).health, 20);
    }

    #[test]
    fn test_overwhelm_blocked_by_barrier() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 10, 10).with_keyword(Keyword::Overwhelm),
            vec![Card::vanilla(CardId(2), 1, 1, 4).with_keyword(Keyword::Barrier)],
        );

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.overwhelm_excess, 0);
        assert_eq!(blocker(&state, 0).health, 4);
        assert_eq!(state.player(PlayerId::Opponent).health, 20);
    }

    #[test]
    fn test_overwhelm_overflow_never_wins() {
        let mut state = board(
            Card::vanilla(CardId(1), 1, 10, 10).with_keyword(Keyword::Overwhelm),
            vec![Card::vanilla(CardId(2), 1, 1, 1)],
        );
        state.player_mut(PlayerId::Opponent).health = 3;

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert!(!report.lethal);
        assert_eq!(state.player(PlayerId::Opponent).health, -6);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_opponent_can_attack() {
        let mut state = GameState::new(&EngineConfig::default());
        state.player_mut(PlayerId::Opponent).field.push(Card::vanilla(CardId(5), 1, 4, 4));

        resolve_attack(&mut state, PlayerId::Opponent, CardId(5)).unwrap();

        assert_eq!(state.player(PlayerId::Player).health, 16);
    }

    #[test]
    fn test_extreme_stats_saturate() {
        let mut state = board(Card::vanilla(CardId(1), 1, i32::MAX, 1), vec![]);
        state.player_mut(PlayerId::Opponent).health = -5;

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert!(report.lethal);
        assert_eq!(state.player(PlayerId::Opponent).health, i32::MIN);

        let mut state = board(
            Card::vanilla(CardId(1), 1, i32::MAX, 10).with_keyword(Keyword::Overwhelm),
            vec![Card::vanilla(CardId(2), 1, i32::MIN, 1)],
        );
        state.player_mut(PlayerId::Opponent).health = -5;

        let report = resolve_attack(&mut state, PlayerId::Player, CardId(1)).unwrap();

        assert_eq!(report.overwhelm_excess, i32::MAX - 1);
        assert_eq!(blocker(&state, 0).health, 0);
        assert_eq!(state.player(PlayerId::Opponent).health, i32::MIN);
        // A negative strike heals, but never past i32::MAX.
        assert_eq!(attacker(&state).health, i32::MAX);
    }
}
