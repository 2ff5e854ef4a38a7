// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Chain entries of the suspect lookup table.

use std::iter::FusedIterator;

/// Position of an entry in the table's entry arena.
pub(crate) type EntryId = usize;

/// A clue to suspect binding, linked to the next entry of its bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) clue: String,
    pub(crate) suspect: String,
    pub(crate) next: Option<EntryId>,
}

impl Entry {
    /// The clue text (key).
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// The suspect bound to the clue.
    pub fn suspect(&self) -> &str {
        &self.suspect
    }
}

/// Walks one bucket chain from its head, most recent binding first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    entries: &'a [Entry],
    cursor: Option<EntryId>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(entries: &'a [Entry], head: Option<EntryId>) -> Self {
        Self {
            entries,
            cursor: head,
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.cursor?)?;
        self.cursor = entry.next;
        Some(entry)
    }
}

impl FusedIterator for Chain<'_> {}
