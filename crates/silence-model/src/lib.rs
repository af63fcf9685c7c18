//! Silence and Alert Data Model
//!
//! Wire-shaped types as received from the alert-management backend:
//! - Silences with matchers, lifecycle state, and schedule bounds
//! - Alerts with the set of silences currently suppressing them
//! - JSON decode entry points for backend payloads
//!
//! All types are read-only inputs to the table core; they are created
//! and mutated by the backend, never here.

mod alert;
mod error;
mod matcher;
mod silence;

pub use alert::{Alert, AlertStatus};
pub use error::ModelError;
pub use matcher::Matcher;
pub use silence::{Silence, SilenceState, SilenceStatus};

/// Decode a backend silences payload (JSON array).
pub fn silences_from_json(payload: &str) -> Result<Vec<Silence>, ModelError> {
    serde_json::from_str(payload).map_err(ModelError::from)
}

/// Decode a backend alerts payload (JSON array).
pub fn alerts_from_json(payload: &str) -> Result<Vec<Alert>, ModelError> {
    serde_json::from_str(payload).map_err(ModelError::from)
}
