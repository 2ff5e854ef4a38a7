//! Data structures behind the Detective Quest game.
//!
//! - [`room_graph`]: the static binary tree of rooms the player walks through
//! - [`clue_index`]: an unbalanced binary search tree of collected clues
//! - [`suspect_lookup`]: a chained hash table from clue text to suspect
//! - [`keyword_matcher`]: substring search used to classify clues
//!
//! Every structure stores its nodes in an arena addressed by indices, so no
//! node is ever shared or freed on its own.

pub mod clue_index;
pub mod keyword_matcher;
pub mod room_graph;
pub mod suspect_lookup;

// Re-export common data structures
pub use clue_index::ClueIndex;
pub use keyword_matcher::KeywordMatcher;
pub use room_graph::{RoomGraph, RoomId, Side};
pub use suspect_lookup::SuspectLookup;
