//! Domain types and the pair-sum search.

pub mod search;
pub mod state;

pub use search::{find_pair, Solution};
pub use state::MatcherState;
