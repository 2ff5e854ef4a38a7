// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the suspect lookup table.

/// Error types for suspect lookup construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SuspectLookupError {
    /// A table needs at least one bucket
    #[error("Suspect lookup table needs at least one bucket")]
    ZeroBuckets,
}

/// Result type for suspect lookup operations
pub type Result<T> = std::result::Result<T, SuspectLookupError>;
