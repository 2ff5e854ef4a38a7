// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword matcher for clue classification.
//!
//! A Boyer-Moore-Horspool substring search: each keyword is preprocessed once
//! into a bad character table, then tested against every discovered clue.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::keyword_matcher::KeywordMatcher;
//!
//! let matcher = KeywordMatcher::new("vinho");
//! assert!(matcher.is_match("Uma garrafa de vinho tinto"));
//! assert_eq!(matcher.find("Lata caída"), None);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing: O(m + σ), m the keyword length and σ = 256
//! - Search: O(n / m) best case, O(n * m) worst case

mod matcher;
mod table;

pub use matcher::KeywordMatcher;
