//! The engine facade: one instance per match.
//!
//! `Engine` owns the `GameState`, the configuration and the RNG streams,
//! and exposes the four operations external collaborators use:
//!
//! - `reset`: discard the current game and deal a fresh one
//! - `state` / `view`: read-only snapshots
//! - `legal_actions`: the ordered legal set for a player
//! - `apply`: submit one action
//!
//! There is no global engine. Concurrent matches use separate instances.
//!
//! ```
//! use rift_sim::{Engine, EngineConfig, PlayerId};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! assert_eq!(engine.state().player(PlayerId::Player).hand.len(), 4);
//!
//! let first = engine.legal_actions(PlayerId::Player)[0];
//! engine.apply(&first);
//! assert_eq!(engine.state().active_player, PlayerId::Opponent);
//! ```

use log::debug;

use crate::cards::{CardFactory, CardSource};
use crate::core::{
    Action, ConfigError, EngineConfig, GameRng, GameState, PlayerId, PlayerView,
};
use crate::rules;

/// A single match's authoritative simulator.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    /// Forked once per game.
    master: GameRng,
    cards: CardFactory,
    policy_rng: GameRng,
    state: GameState,
    games_started: u64,
}

impl Engine {
    /// Validate `config` and deal the first game.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut master = GameRng::new(config.seed);
        let game_rng = master.fork();
        let cards = CardFactory::new(&config, game_rng.for_context("cards"));
        let policy_rng = game_rng.for_context("opponent");

        let mut engine = Self {
            state: GameState::new(&config),
            config,
            master,
            cards,
            policy_rng,
            games_started: 0,
        };
        engine.deal();
        Ok(engine)
    }

    /// Start from a hand-built state instead of dealing.
    ///
    /// Generated cards get ids above every id already in `state`, so a
    /// state that already holds `CardId(u32::MAX)` is rejected.
    pub fn from_state(config: EngineConfig, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;

        let next_id = match state
            .players
            .iter()
            .flat_map(|(_, p)| p.hand.iter().chain(&p.field).chain(&p.graveyard))
            .map(|c| c.id)
            .max()
        {
            None => 1,
            Some(max) => max
                .raw()
                .checked_add(1)
                .ok_or(ConfigError::IdSpaceExhausted(max))?,
        };

        let mut master = GameRng::new(config.seed);
        let game_rng = master.fork();
        let cards = CardFactory::new(&config, game_rng.for_context("cards")).with_first_id(next_id);
        let policy_rng = game_rng.for_context("opponent");

        Ok(Self {
            config,
            master,
            cards,
            policy_rng,
            state,
            games_started: 1,
        })
    }

    /// Throw away the current game and deal a new one.
    ///
    /// Each reset uses a fresh fork of the master seed, so the n-th game of
    /// an engine is always the same.
    pub fn reset(&mut self) -> &GameState {
        let game_rng = self.master.fork();
        self.cards = CardFactory::new(&self.config, game_rng.for_context("cards"));
        self.policy_rng = game_rng.for_context("opponent");
        self.deal();
        &self.state
    }

    fn deal(&mut self) {
        self.state = GameState::new(&self.config);
        self.games_started += 1;

        for id in PlayerId::ALL {
            for _ in 0..self.config.initial_hand_size {
                let card = self.cards.next_card();
                self.state.player_mut(id).hand.push(card);
            }
        }

        debug!("game {} dealt", self.games_started);
        self.state.record(format!(
            "game {} begins: {} to act",
            self.games_started, self.state.active_player
        ));
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of games dealt so far, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    /// Ordered legal actions for `player` (empty unless it is their turn).
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        rules::legal_actions(&self.state, player)
    }

    /// Apply one action for the active player.
    ///
    /// Returns `false` if the action was ignored (stale card reference or
    /// finished game). Only actions from `legal_actions` are guaranteed to
    /// keep the state consistent.
    pub fn apply(&mut self, action: &Action) -> bool {
        rules::apply_action(&mut self.state, action, &self.config, &mut self.cards)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Snapshot from one side's seat.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView {
        PlayerView::new(&self.state, player)
    }

    /// State and the opponent-policy RNG stream, borrowed together.
    pub(crate) fn policy_parts(&mut self) -> (&GameState, &mut GameRng) {
        (&self.state, &mut self.policy_rng)
    }
}
