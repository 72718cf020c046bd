//! Card identification.
//!
//! Every card gets a `CardId` when it is created and keeps it for its whole
//! lifetime, through hand, field and graveyard. Ids are allocated from a
//! per-game counter, so they are unique within a match.

use serde::{Deserialize, Serialize};

/// Opaque, unique identifier for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Monotonic allocator for card ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator whose first id is `first`.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocate the next id.
    ///
    /// The counter saturates: once `u32::MAX` is handed out it is handed
    /// out again rather than wrapping back to low ids.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Peek at the id the next `alloc` will return.
    #[must_use]
    pub const fn peek(&self) -> CardId {
        CardId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = IdAllocator::starting_at(100);

        assert_eq!(ids.peek(), CardId(100));
        assert_eq!(ids.alloc(), CardId(100));
        assert_eq!(ids.alloc(), CardId(101));
        assert_eq!(ids.peek(), CardId(102));
    }

    #[test]
    fn test_alloc_saturates_at_max() {
        let mut ids = IdAllocator::starting_at(u32::MAX - 1);

        assert_eq!(ids.alloc(), CardId(u32::MAX - 1));
        assert_eq!(ids.alloc(), CardId(u32::MAX));
        assert_eq!(ids.alloc(), CardId(u32::MAX));
        assert_eq!(ids.peek(), CardId(u32::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "card_42");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
