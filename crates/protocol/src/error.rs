//! Error types for the storymap-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, including serialization failures and validation
//! errors.

use thiserror::Error;

use crate::board::CellRef;
use crate::story::StoryId;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A story with the given id was not found on the board.
    #[error("story not found: {0}")]
    StoryNotFound(StoryId),

    /// The addressed cell does not exist on the board.
    #[error("cell not found: task {}, release {}", .0.task_id, .0.release_id)]
    CellNotFound(CellRef),

    /// A draft title was empty.
    #[error("story title cannot be empty")]
    EmptyDraftTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
