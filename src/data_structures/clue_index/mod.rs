// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Clue index: an unbalanced binary search tree of clue texts.
//!
//! Clues are kept unique and ordered by byte-wise comparison of their text,
//! which is the same order a C `strcmp` gives on UTF-8 strings.
//!
//! # Features
//!
//! - Idempotent insertion: adding a clue twice leaves the tree unchanged
//! - Empty text is never stored
//! - Lazy, restartable in-order enumeration backed by an explicit stack
//! - Arena storage; no per-node allocation bookkeeping
//!
//! No rebalancing is done. Depth can degrade to the number of clues for sorted
//! insertion orders, which is fine for the handful of clues a mansion holds.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::clue_index::ClueIndex;
//!
//! let mut clues = ClueIndex::new();
//! assert!(clues.insert("Livro arrancado"));
//! assert!(clues.insert("Copo quebrado"));
//! assert!(!clues.insert("Copo quebrado"));
//! assert!(!clues.insert(""));
//!
//! let ordered: Vec<&str> = clues.in_order().collect();
//! assert_eq!(ordered, vec!["Copo quebrado", "Livro arrancado"]);
//! ```

mod iter;
mod node;

use std::cmp::Ordering;

pub use iter::InOrder;
use node::{ClueNode, NodeId};

/// Ordered set of discovered clues.
#[derive(Debug, Clone, Default)]
pub struct ClueIndex {
    /// Node arena; insertion order
    nodes: Vec<ClueNode>,

    /// Root of the tree, `None` while empty
    root: Option<NodeId>,
}

impl ClueIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a clue.
    ///
    /// # Arguments
    ///
    /// * `text` - The clue text. Empty text means "no clue" and is ignored.
    ///
    /// # Returns
    ///
    /// `true` if a new node was added, `false` if the text was empty or already present.
    pub fn insert<S: AsRef<str>>(&mut self, text: S) -> bool {
        let text = text.as_ref();
        if text.is_empty() {
            return false;
        }

        let mut cursor = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.push(text));
                return true;
            }
        };

        loop {
            let ordering = text.cmp(self.nodes[cursor].text.as_str());
            let next = match ordering {
                Ordering::Equal => {
                    tracing::trace!(clue = text, "Clue already indexed");
                    return false;
                }
                Ordering::Less => self.nodes[cursor].left,
                Ordering::Greater => self.nodes[cursor].right,
            };

            match next {
                Some(child) => cursor = child,
                None => {
                    let id = self.push(text);
                    let parent = &mut self.nodes[cursor];
                    if ordering == Ordering::Less {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return true;
                }
            }
        }
    }

    fn push(&mut self, text: &str) -> NodeId {
        self.nodes.push(ClueNode::new(text));
        tracing::debug!(clue = text, size = self.nodes.len(), "Clue indexed");
        self.nodes.len() - 1
    }

    /// Checks whether the clue is stored.
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Returns the clues in ascending order.
    ///
    /// Each call starts a fresh walk from the root.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(&self.nodes, self.root)
    }

    /// Number of distinct clues stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no clue has been stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels in the tree (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();

        while let Some((id, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|child| (child, level + 1)));
            pending.extend(node.right.map(|child| (child, level + 1)));
        }

        deepest
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
