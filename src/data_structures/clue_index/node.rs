// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the clue index.
//!
//! Nodes are stored in the index's arena; children are arena positions rather
//! than owned boxes, so dropping the arena releases the whole tree at once.

/// Position of a node inside the clue index arena.
pub(crate) type NodeId = usize;

/// A node of the clue binary search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueNode {
    /// The clue text, the key of the tree
    pub(crate) text: String,

    /// Subtree of clues that sort before `text`
    pub(crate) left: Option<NodeId>,

    /// Subtree of clues that sort after `text`
    pub(crate) right: Option<NodeId>,
}

impl ClueNode {
    /// Creates a leaf node holding `text`.
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            left: None,
            right: None,
        }
    }
}
