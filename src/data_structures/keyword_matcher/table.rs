// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bad character shift table for Horspool matching.

/// Number of distinct byte values.
const ALPHABET_SIZE: usize = 256;

/// How far the search window may slide, keyed by the byte under its last position.
#[derive(Debug, Clone)]
pub(crate) struct ShiftTable {
    shifts: [usize; ALPHABET_SIZE],
}

impl ShiftTable {
    /// Builds the table for `pattern`.
    ///
    /// Bytes absent from the pattern (ignoring its last byte) shift by the full
    /// pattern length; the others shift so their rightmost occurrence lines up.
    pub(crate) fn new(pattern: &[u8]) -> Self {
        let len = pattern.len().max(1);
        let mut shifts = [len; ALPHABET_SIZE];

        if let Some((_, body)) = pattern.split_last() {
            for (i, &byte) in body.iter().enumerate() {
                shifts[usize::from(byte)] = pattern.len() - 1 - i;
            }
        }

        Self { shifts }
    }

    /// Shift for the byte found under the window's last position.
    pub(crate) fn shift(&self, byte: u8) -> usize {
        self.shifts[usize::from(byte)]
    }
}
