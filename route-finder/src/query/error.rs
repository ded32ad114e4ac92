//! Query error types.
//!
//! These are the user-facing failures of a single command. Their display
//! strings are the exact messages shown at the prompt, and none of them
//! ends the session.

use crate::network::NetworkError;

/// A recoverable failure of one query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A supplied code does not name any city
    #[error("City code {0} doesn't exist.")]
    UnknownCity(String),

    /// Insertion where a road already exists (city names)
    #[error("The road between {from} and {to} already exists.")]
    DuplicateRoad { from: String, to: String },

    /// Removal where no road exists (city names)
    #[error("The road between {from} and {to} doesn't exist.")]
    RoadNotFound { from: String, to: String },

    /// Both cities exist but no route joins them (city names)
    #[error("There is no route from {from} to {to}.")]
    Unreachable { from: String, to: String },

    /// Wrong number of tokens, or a distance that is not a non-negative integer
    #[error("Invalid input.")]
    MalformedInput,

    /// The network rejected an operation for a reason a command cannot cause
    #[error("{0}")]
    Network(NetworkError),
}
