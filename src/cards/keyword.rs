//! Combat keywords.
//!
//! Keywords are a closed enum; the combat resolver matches on them
//! exhaustively. Adding a keyword means extending `Keyword` and the
//! resolver, never comparing strings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A combat keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// First strike: the bearer deals its damage before the blocker
    /// retaliates, and a blocker that dies to it never retaliates.
    QuickAttack,
    /// One-time shield that absorbs the first hit.
    Barrier,
    /// Damage beyond a blocker's remaining health carries to the defender.
    Overwhelm,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 3] = [Keyword::QuickAttack, Keyword::Barrier, Keyword::Overwhelm];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Keyword::QuickAttack => "Quick Attack",
            Keyword::Barrier => "Barrier",
            Keyword::Overwhelm => "Overwhelm",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Duplicate-free keyword set in insertion order.
///
/// ```
/// use rift_sim::cards::{Keyword, Keywords};
///
/// let kws = Keywords::from_slice(&[Keyword::Barrier, Keyword::Barrier]);
/// assert_eq!(kws.len(), 1);
/// assert!(kws.contains(Keyword::Barrier));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Keyword>", into = "Vec<Keyword>")]
pub struct Keywords(SmallVec<[Keyword; 3]>);

impl Keywords {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, dropping duplicates.
    #[must_use]
    pub fn from_slice(keywords: &[Keyword]) -> Self {
        let mut set = Self::new();
        for &kw in keywords {
            set.insert(kw);
        }
        set
    }

    /// Insert a keyword. Returns false if it was already present.
    pub fn insert(&mut self, keyword: Keyword) -> bool {
        if self.contains(keyword) {
            return false;
        }
        self.0.push(keyword);
        true
    }

    #[must_use]
    pub fn contains(&self, keyword: Keyword) -> bool {
        self.0.contains(&keyword)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Keyword>> for Keywords {
    fn from(keywords: Vec<Keyword>) -> Self {
        Self::from_slice(&keywords)
    }
}

impl From<Keywords> for Vec<Keyword> {
    fn from(keywords: Keywords) -> Self {
        keywords.0.into_vec()
    }
}

impl FromIterator<Keyword> for Keywords {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        let mut set = Self::new();
        for kw in iter {
            set.insert(kw);
        }
        set
    }
}
