//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The engine is strictly two-sided: the primary side (`Player`), which an
//! external learner or human controls, and the `Opponent`, which is usually
//! driven by a policy through the opponent loop.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`, with a helper for
//! borrowing both sides mutably at once (needed by combat).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two fixed sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The primary side. Turn numbers advance when control returns here.
    Player,
    /// The opposing side.
    Opponent,
}

impl PlayerId {
    /// The primary side.
    pub const PRIMARY: PlayerId = PlayerId::Player;

    /// Both sides, primary first.
    pub const ALL: [PlayerId; 2] = [PlayerId::Player, PlayerId::Opponent];

    /// Slot index (0 for the primary side, 1 for the opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player => 0,
            PlayerId::Opponent => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::Player => PlayerId::Opponent,
            PlayerId::Opponent => PlayerId::Player,
        }
    }

    /// Whether this is the primary side.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, PlayerId::Player)
    }

    /// Stable lowercase name, used in log lines and bindings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerId::Player => "player",
            PlayerId::Opponent => "opponent",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlayerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(PlayerId::Player),
            "opponent" => Ok(PlayerId::Opponent),
            other => Err(format!("unknown player id: {other}")),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rift_sim::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i32> = PlayerMap::new(|_| 20);
/// life[PlayerId::Opponent] -= 5;
///
/// assert_eq!(life[PlayerId::Player], 20);
/// assert_eq!(life[PlayerId::Opponent], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::Player), factory(PlayerId::Opponent)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow `player`'s entry and the other side's entry mutably.
    ///
    /// Returns `(player's data, other side's data)`.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let (first, second) = self.data.split_at_mut(1);
        match player {
            PlayerId::Player => (&mut first[0], &mut second[0]),
            PlayerId::Opponent => (&mut second[0], &mut first[0]),
        }
    }

    /// Iterate over (PlayerId, &T) pairs, primary first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
