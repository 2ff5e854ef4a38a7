// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suspect lookup: a fixed-size hash table with chained buckets.
//!
//! Maps clue text to the suspect it incriminates. The number of buckets is
//! fixed at construction; collisions are chained, newest binding first.
//!
//! # Shadowing
//!
//! The table never deduplicates. Inserting a key that is already present
//! prepends a second binding to the same chain. Lookups scan from the head, so
//! the most recent binding wins while older ones stay in the chain:
//!
//! ```
//! use detective_quest_lib::data_structures::suspect_lookup::SuspectLookup;
//!
//! let mut table = SuspectLookup::new();
//! table.insert("Faca fora do lugar", "Carlos");
//! table.insert("Faca fora do lugar", "Berta");
//!
//! assert_eq!(table.lookup("Faca fora do lugar"), Some("Berta"));
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.lookup("Livro arrancado"), None);
//! ```

mod entry;
mod error;
mod hash;

pub use entry::{Chain, Entry};
pub use error::{Result, SuspectLookupError};

use entry::EntryId;

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Chained hash table from clue text to suspect name.
#[derive(Debug, Clone)]
pub struct SuspectLookup {
    /// Head of each bucket's chain
    buckets: Vec<Option<EntryId>>,

    /// Entry arena, in insertion order
    entries: Vec<Entry>,
}

impl SuspectLookup {
    /// Creates a table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKET_COUNT],
            entries: Vec::new(),
        }
    }

    /// Creates a table with `bucket_count` buckets.
    ///
    /// # Returns
    ///
    /// * `Ok(SuspectLookup)` - A new empty table.
    /// * `Err(SuspectLookupError::ZeroBuckets)` - If `bucket_count` is zero.
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(SuspectLookupError::ZeroBuckets);
        }
        Ok(Self {
            buckets: vec![None; bucket_count],
            entries: Vec::new(),
        })
    }

    /// Bucket index of `clue`. Pure: the same text always lands in the same bucket.
    pub fn hash(&self, clue: &str) -> usize {
        hash::bucket_index(clue, self.buckets.len())
    }

    /// Binds `clue` to `suspect` at the head of its bucket.
    ///
    /// Existing bindings for the same clue are kept and shadowed.
    ///
    /// # Returns
    ///
    /// `true` if the binding was stored, `false` if entry storage could not
    /// grow (the insertion is skipped).
    pub fn insert<C, S>(&mut self, clue: C, suspect: S) -> bool
    where
        C: Into<String>,
        S: Into<String>,
    {
        let clue = clue.into();
        let suspect = suspect.into();

        if let Err(err) = self.entries.try_reserve(1) {
            tracing::warn!(clue = %clue, error = %err, "Skipping suspect binding, allocation failed");
            return false;
        }

        let bucket = self.hash(&clue);
        let id = self.entries.len();
        tracing::debug!(clue = %clue, suspect = %suspect, bucket, "Suspect bound");

        self.entries.push(Entry {
            clue,
            suspect,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(id);
        true
    }

    /// Finds the suspect bound to `clue`.
    ///
    /// # Returns
    ///
    /// The suspect of the most recent binding for `clue`, or `None` if the
    /// clue was never inserted.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(self.hash(clue))
            .find(|entry| entry.clue == clue)
            .map(Entry::suspect)
    }

    /// Walks the chain of `bucket`, head first. Empty for out-of-range buckets.
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        let head = self.buckets.get(bucket).copied().flatten();
        Chain::new(&self.entries, head)
    }

    /// Number of bindings, shadowed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no binding.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Releases every binding, keeping the bucket count.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.iter_mut().for_each(|head| *head = None);
    }
}

impl Default for SuspectLookup {
    fn default() -> Self {
        Self::new()
    }
}
