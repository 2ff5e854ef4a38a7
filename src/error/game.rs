//! Game error module.
//!
//! Errors that abort a session. Invalid navigation input is not among them:
//! the exploration loop recovers from it by re-prompting.

use thiserror::Error;

use crate::data_structures::room_graph::RoomGraphError;
use crate::data_structures::suspect_lookup::SuspectLookupError;

/// Errors that can end a game session.
#[derive(Error, Debug)]
pub enum GameError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    /// The room map could not be built.
    #[error("Invalid room map: {0}")]
    RoomGraph(#[from] RoomGraphError),

    /// The suspect table could not be created.
    #[error("Invalid suspect table: {0}")]
    SuspectLookup(#[from] SuspectLookupError),
}
