// Copyright (c) 2025 Detective Quest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the room graph.

/// Errors raised while turning a [`RoomBlueprint`](super::RoomBlueprint) into a graph.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoomGraphError {
    /// A room was declared with a blank name.
    #[error("Room names cannot be empty")]
    EmptyName,

    /// Two rooms share the same name.
    #[error("Duplicate room name: {0}")]
    DuplicateName(String),
}

/// Result type for room graph construction.
pub type RoomGraphResult<T> = std::result::Result<T, RoomGraphError>;
