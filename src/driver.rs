//! The opponent loop: let the non-primary side play until control returns.
//!
//! The loop uses the same two primitives as any external caller
//! (`legal_actions` then `apply`) and stops when:
//!
//! - the game has a winner,
//! - the primary side is active again,
//! - the active side has no legal actions or the policy declines, or
//! - the step budget (`EngineConfig::opponent_step_budget`) runs out.
//!
//! Running out of budget is not an error. Callers must be ready for the
//! opponent to still hold the turn afterwards.

use log::debug;

use crate::core::PlayerId;
use crate::engine::Engine;
use crate::policy::OpponentPolicy;

/// Why the opponent loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The primary side holds the turn again.
    ControlReturned,
    /// The game ended.
    GameOver(PlayerId),
    /// The active side had nothing to do.
    NoLegalActions,
    /// The policy returned no choice.
    PolicyDeclined,
    /// The step budget ran out with the opponent still active.
    BudgetExhausted,
}

/// Outcome plus the number of actions applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopReport {
    pub outcome: LoopOutcome,
    pub steps: u32,
}

/// Drive the non-primary side with `policy` until it cedes control.
///
/// Out-of-range policy indices wrap around the legal list.
pub fn run_until_control_returns<P: OpponentPolicy + ?Sized>(
    engine: &mut Engine,
    policy: &mut P,
) -> LoopReport {
    let budget = engine.config().opponent_step_budget;
    let mut steps = 0;

    let outcome = loop {
        if let Some(winner) = engine.winner() {
            break LoopOutcome::GameOver(winner);
        }
        let active = engine.state().active_player;
        if active.is_primary() {
            break LoopOutcome::ControlReturned;
        }
        if steps >= budget {
            debug!("opponent loop budget of {budget} steps exhausted");
            break LoopOutcome::BudgetExhausted;
        }

        let actions = engine.legal_actions(active);
        if actions.is_empty() {
            break LoopOutcome::NoLegalActions;
        }

        let choice = {
            let (state, rng) = engine.policy_parts();
            policy.choose(state, &actions, rng)
        };
        let Some(idx) = choice else {
            break LoopOutcome::PolicyDeclined;
        };

        engine.apply(&actions[idx % actions.len()]);
        steps += 1;
    };

    debug!("opponent loop stopped after {steps} steps: {outcome:?}");
    LoopReport { outcome, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{Action, CardId, EngineConfig, GameRng, GameState};
    use crate::policy::{AggressivePolicy, PassivePolicy, UniformPolicy};

    fn opponent_to_act(config: &EngineConfig) -> Engine {
        let mut engine = Engine::new(config.clone()).unwrap();
        engine.apply(&Action::EndTurn);
        engine
    }

    #[test]
    fn test_primary_turn_is_immediate_return() {
        let mut engine = Engine::new(EngineConfig::default()).unwrap();

        let report = run_until_control_returns(&mut engine, &mut UniformPolicy);

        assert_eq!(report, LoopReport { outcome: LoopOutcome::ControlReturned, steps: 0 });
    }

    #[test]
    fn test_passive_returns_after_one_step() {
        let mut engine = opponent_to_act(&EngineConfig::default());

        let report = run_until_control_returns(&mut engine, &mut PassivePolicy);

        assert_eq!(report.outcome, LoopOutcome::ControlReturned);
        assert_eq!(report.steps, 1);
        assert_eq!(engine.state().active_player, PlayerId::Player);
        assert_eq!(engine.state().turn, 2);
    }

    #[test]
    fn test_uniform_eventually_returns_or_stops() {
        for seed in 0..20 {
            let mut engine = opponent_to_act(&EngineConfig::default().with_seed(seed));

            let report = run_until_control_returns(&mut engine, &mut UniformPolicy);

            assert!(report.steps <= 100);
            match report.outcome {
                LoopOutcome::ControlReturned => {
                    assert_eq!(engine.state().active_player, PlayerId::Player)
                }
                LoopOutcome::GameOver(w) => assert_eq!(engine.winner(), Some(w)),
                LoopOutcome::BudgetExhausted => assert_eq!(report.steps, 100),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn test_budget_exhaustion() {
        // A durable wall the opponent can never get through.
        let config = EngineConfig::default().with_opponent_step_budget(7);
        let mut state = GameState::new(&config);
        state.active_player = PlayerId::Opponent;
        state.player_mut(PlayerId::Opponent).field.push(Card::vanilla(CardId(1), 1, 0, 5));
        state.player_mut(PlayerId::Player).field.push(Card::vanilla(CardId(2), 1, 0, 5));
        let mut engine = Engine::from_state(config, state).unwrap();

        let report = run_until_control_returns(&mut engine, &mut AggressivePolicy);

        assert_eq!(report, LoopReport { outcome: LoopOutcome::BudgetExhausted, steps: 7 });
        assert_eq!(engine.state().active_player, PlayerId::Opponent);
        assert!(engine.winner().is_none());
    }

    #[test]
    fn test_aggressive_can_win() {
        let config = EngineConfig::default();
        let mut state = GameState::new(&config);
        state.active_player = PlayerId::Opponent;
        state.player_mut(PlayerId::Opponent).field.push(Card::vanilla(CardId(1), 1, 7, 1));
        let mut engine = Engine::from_state(config, state).unwrap();

        let report = run_until_control_returns(&mut engine, &mut AggressivePolicy);

        assert_eq!(report.outcome, LoopOutcome::GameOver(PlayerId::Opponent));
        assert_eq!(report.steps, 3);
        assert_eq!(engine.state().player(PlayerId::Player).health, -1);
    }

    #[test]
    fn test_policy_decline_stops() {
        let mut engine = opponent_to_act(&EngineConfig::default());
        let mut never = |_: &GameState, _: &[Action], _: &mut GameRng| -> Option<usize> { None };

        let report = run_until_control_returns(&mut engine, &mut never);

        assert_eq!(report.outcome, LoopOutcome::PolicyDeclined);
        assert_eq!(report.steps, 0);
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let mut engine = opponent_to_act(&EngineConfig::default());
        // Index equal to the list length wraps to 0: EndTurn.
        let mut overshoot = |_: &GameState, actions: &[Action], _: &mut GameRng| Some(actions.len());

        let report = run_until_control_returns(&mut engine, &mut overshoot);

        assert_eq!(report.outcome, LoopOutcome::ControlReturned);
        assert_eq!(report.steps, 1);
    }

    #[test]
    fn test_finished_game_reports_winner() {
        let config = EngineConfig::default();
        let mut state = GameState::new(&config);
        state.active_player = PlayerId::Opponent;
        state.winner = Some(PlayerId::Player);
        let mut engine = Engine::from_state(config, state).unwrap();

        let report = run_until_control_returns(&mut engine, &mut UniformPolicy);

        assert_eq!(report.outcome, LoopOutcome::GameOver(PlayerId::Player));
    }
}
