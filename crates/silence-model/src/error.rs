//! Model Error Types

use thiserror::Error;

/// Errors when decoding backend payloads
#[derive(Debug, Error)]
pub enum ModelError {
    /// Payload is not valid JSON or does not match the wire shape
    #[error("Invalid backend payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
