// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword matcher implementation.

use super::table::ShiftTable;

/// A keyword preprocessed for repeated substring searches.
///
/// Matching is byte-wise and case-sensitive. Because UTF-8 is
/// self-synchronizing, a byte match of a valid UTF-8 keyword always starts on a
/// character boundary of the text.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    /// The keyword text
    keyword: String,

    /// Precomputed skip distances
    shifts: ShiftTable,
}

impl KeywordMatcher {
    /// Preprocesses `keyword`.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The text to look for. An empty keyword matches at offset 0.
    pub fn new<S: AsRef<str>>(keyword: S) -> Self {
        let keyword = keyword.as_ref().to_owned();
        let shifts = ShiftTable::new(keyword.as_bytes());
        Self { keyword, shifts }
    }

    /// The keyword this matcher looks for.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Finds the first occurrence of the keyword.
    ///
    /// # Returns
    ///
    /// The byte offset of the first match, or `None`.
    pub fn find(&self, text: &str) -> Option<usize> {
        let text = text.as_bytes();
        let pattern = self.keyword.as_bytes();
        let len = pattern.len();
        if len == 0 {
            return Some(0);
        }

        let mut position = 0;
        while position + len <= text.len() {
            let window = &text[position..position + len];
            if window == pattern {
                return Some(position);
            }
            position += self.shifts.shift(window[len - 1]);
        }

        None
    }

    /// Whether the keyword occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}
