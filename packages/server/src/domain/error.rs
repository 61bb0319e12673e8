//! Domain error types.

use thiserror::Error;

/// Errors raised when a value object rejects its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Connection ID must not be empty")]
    EmptyConnectionId,

    #[error("Stroke path needs at least {min} points, got {actual}")]
    TooFewPathPoints { min: usize, actual: usize },

    #[error("Stroke segment must contain at least one point")]
    EmptySegment,

    #[error("Movement payload must be a JSON object")]
    MovementPayloadNotObject,
}

/// Errors raised while pushing a message to connected clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MessagePushError {
    #[error("Client '{0}' is not connected")]
    ClientNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to encode message: {0}")]
    EncodeFailed(String),
}
