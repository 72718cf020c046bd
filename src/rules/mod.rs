//! The rules: what a player may do and what each action does.
//!
//! - `legal`: ordered legal-action enumeration
//! - `apply`: action application (with silent no-ops for stale actions)
//! - `combat`: blocker selection, strikes and keyword interactions
//! - `turn`: end-of-turn bookkeeping (control switch, mana, draw)
//!
//! All functions operate on a caller-owned `GameState`; none of them keep
//! state of their own.

pub mod legal;
pub mod apply;
pub mod combat;
pub mod turn;

pub use legal::{is_legal, legal_actions};
pub use apply::apply_action;
pub use combat::{resolve_attack, CombatReport};
pub use turn::end_turn;
