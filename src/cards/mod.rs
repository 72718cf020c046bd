//! Cards: keywords, unit cards and the sources new cards are drawn from.
//!
//! - `Keyword` / `Keywords`: closed keyword enum and a small set over it
//! - `Card`: id, cost, combat stats and the one-shot barrier
//! - `CardSource`: where draws come from (`CardFactory` for the infinite
//!   random deck, `ScriptedCards` for fixed sequences)

pub mod keyword;
pub mod card;
pub mod factory;

pub use keyword::{Keyword, Keywords};
pub use card::Card;
pub use factory::{CardFactory, CardSource, ScriptedCards};
