//! Card sources.
//!
//! The engine models an infinite random deck: every draw mints a fresh
//! card. `CardSource` is the seam the turn controller draws through, so
//! tests and tools can substitute a scripted sequence.

use super::card::Card;
use super::keyword::{Keyword, Keywords};
use crate::core::config::{EngineConfig, StatRange};
use crate::core::entity::{CardId, IdAllocator};
use crate::core::rng::GameRng;

/// Something that can mint the next card to be drawn.
pub trait CardSource {
    /// Produce a new card with a fresh, unique id.
    fn next_card(&mut self) -> Card;
}

/// Random card generator backed by a deterministic RNG stream.
#[derive(Clone, Debug)]
pub struct CardFactory {
    rng: GameRng,
    ids: IdAllocator,
    cost: StatRange,
    attack: StatRange,
    health: StatRange,
    keyword_chance: f64,
}

impl CardFactory {
    /// Create a factory using the config's stat ranges.
    #[must_use]
    pub fn new(config: &EngineConfig, rng: GameRng) -> Self {
        Self {
            rng,
            ids: IdAllocator::starting_at(1),
            cost: config.cost_range,
            attack: config.attack_range,
            health: config.health_range,
            keyword_chance: config.keyword_chance,
        }
    }

    /// Start allocating ids at `first` instead of 1.
    #[must_use]
    pub fn with_first_id(mut self, first: u32) -> Self {
        self.ids = IdAllocator::starting_at(first);
        self
    }

    /// Id the next generated card will receive.
    #[must_use]
    pub fn peek_id(&self) -> CardId {
        self.ids.peek()
    }

    fn roll(&mut self, range: StatRange) -> i32 {
        self.rng.gen_range(range.min..=range.max)
    }
}

impl CardSource for CardFactory {
    fn next_card(&mut self) -> Card {
        let id = self.ids.alloc();
        let cost = self.roll(self.cost);
        let attack = self.roll(self.attack);
        let health = self.roll(self.health);

        let mut keywords = Keywords::new();
        if self.keyword_chance > 0.0 && self.rng.gen_bool(self.keyword_chance) {
            if let Some(&kw) = self.rng.choose(&Keyword::ALL) {
                keywords.insert(kw);
            }
        }

        Card::new(id, cost, attack, health, keywords)
    }
}

/// Hands out a fixed list of card templates in order, cycling when
/// exhausted. Ids are reassigned from its own allocator so they stay unique.
#[derive(Clone, Debug)]
pub struct ScriptedCards {
    templates: Vec<Card>,
    cursor: usize,
    ids: IdAllocator,
}

impl ScriptedCards {
    /// `first_id` should not collide with ids already in play.
    ///
    /// # Panics
    ///
    /// Panics if `templates` is empty.
    #[must_use]
    pub fn new(templates: Vec<Card>, first_id: u32) -> Self {
        assert!(!templates.is_empty(), "ScriptedCards needs at least one template");
        Self {
            templates,
            cursor: 0,
            ids: IdAllocator::starting_at(first_id),
        }
    }
}

impl CardSource for ScriptedCards {
    fn next_card(&mut self) -> Card {
        let mut card = self.templates[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.templates.len();
        card.id = self.ids.alloc();
        card
    }
}
