// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-order iterator over the clue index.

use std::iter::FusedIterator;

use super::node::{ClueNode, NodeId};

/// Lazy in-order walk over a [`ClueIndex`](super::ClueIndex).
///
/// Uses an explicit stack holding at most one entry per tree level, so the
/// walk never recurses regardless of how degenerate the tree is.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    /// Arena of the index being walked
    nodes: &'a [ClueNode],

    /// Ancestors whose left subtree is being visited
    stack: Vec<NodeId>,

    /// Next subtree to descend into
    cursor: Option<NodeId>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(nodes: &'a [ClueNode], root: Option<NodeId>) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.nodes[id].left;
        }

        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.cursor = node.right;
        Some(node.text.as_str())
    }
}

impl FusedIterator for InOrder<'_> {}
