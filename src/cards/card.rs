//! Cards - identity, combat stats and the barrier shield.
//!
//! A `Card` is the same value in every zone: moving it from hand to field
//! to graveyard never changes its id. Health is signed and may sit at or
//! below zero after combat; the engine does not clean up dead units.
//!
//! ## Barrier
//!
//! `barrier_active` is private so it can only move one way: it starts true
//! iff the card has `Barrier`, and `consume_barrier` turns it off for good.
//! Deserialization re-applies the same rule.

use serde::{Deserialize, Serialize};

use super::keyword::{Keyword, Keywords};
use crate::core::entity::CardId;

/// A unit card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CardRepr")]
pub struct Card {
    /// Stable unique identifier.
    pub id: CardId,

    /// Mana required to play from hand.
    pub cost: i32,

    /// Damage dealt when striking.
    pub attack: i32,

    /// Remaining health. May go non-positive.
    pub health: i32,

    /// Combat keywords.
    pub keywords: Keywords,

    barrier_active: bool,
}

impl Card {
    /// Create a card. The barrier is armed iff `keywords` has `Barrier`.
    #[must_use]
    pub fn new(id: CardId, cost: i32, attack: i32, health: i32, keywords: Keywords) -> Self {
        let barrier_active = keywords.contains(Keyword::Barrier);
        Self {
            id,
            cost,
            attack,
            health,
            keywords,
            barrier_active,
        }
    }

    /// Create a card without keywords.
    #[must_use]
    pub fn vanilla(id: CardId, cost: i32, attack: i32, health: i32) -> Self {
        Self::new(id, cost, attack, health, Keywords::new())
    }

    /// Builder-style keyword addition. Adding `Barrier` arms the shield.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        if self.keywords.insert(keyword) && keyword == Keyword::Barrier {
            self.barrier_active = true;
        }
        self
    }

    #[must_use]
    pub fn has(&self, keyword: Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    /// Whether the barrier shield is still up.
    #[must_use]
    pub fn barrier_active(&self) -> bool {
        self.barrier_active
    }

    /// Pop the barrier if it is up. Returns true if a hit was absorbed.
    pub fn consume_barrier(&mut self) -> bool {
        std::mem::replace(&mut self.barrier_active, false)
    }

    /// Apply one hit. A live barrier absorbs it entirely and is consumed.
    ///
    /// Returns `None` when the barrier absorbed the hit, otherwise the
    /// damage taken.
    pub fn take_hit(&mut self, damage: i32) -> Option<i32> {
        if self.consume_barrier() {
            return None;
        }
        self.health = self.health.saturating_sub(damage);
        Some(damage)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}/{}", self.id, self.cost, self.attack, self.health)?;
        for kw in self.keywords.iter() {
            write!(f, " [{kw}]")?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct CardRepr {
    id: CardId,
    cost: i32,
    attack: i32,
    health: i32,
    #[serde(default)]
    keywords: Keywords,
    #[serde(default)]
    barrier_active: Option<bool>,
}

impl From<CardRepr> for Card {
    fn from(repr: CardRepr) -> Self {
        let mut card = Card::new(repr.id, repr.cost, repr.attack, repr.health, repr.keywords);
        if repr.barrier_active == Some(false) {
            card.consume_barrier();
        }
        card
    }
}
