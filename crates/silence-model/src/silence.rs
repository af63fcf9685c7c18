//! Silence entity

use crate::matcher::Matcher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a silence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SilenceState {
    Pending,
    Active,
    Expired,
}

impl SilenceState {
    /// Whether this silence can no longer be mutated
    pub fn is_expired(&self) -> bool {
        matches!(self, SilenceState::Expired)
    }
}

/// Status wrapper as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SilenceStatus {
    pub state: SilenceState,
}

/// A rule suppressing matching alerts for a time window.
///
/// Created and updated by the alert-management backend; this model is a
/// read-only view of it. Schedule bounds stay in their string form since
/// the backend may send values chrono cannot parse; rendering degrades
/// gracefully instead of rejecting the silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Silence {
    /// Unique identifier
    pub id: String,

    /// Label-match predicates; absent means no matchers
    #[serde(default)]
    pub matchers: Option<Vec<Matcher>>,

    /// Lifecycle status
    pub status: SilenceStatus,

    /// Window start, RFC 3339 string
    pub starts_at: String,

    /// Window end, RFC 3339 string
    pub ends_at: String,

    /// Operator comment
    #[serde(default)]
    pub comment: Option<String>,

    /// Who created the silence
    #[serde(default)]
    pub created_by: Option<String>,

    /// Last backend update, RFC 3339 string
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Silence {
    /// Matchers as a slice, treating an absent sequence as empty
    pub fn matchers(&self) -> &[Matcher] {
        self.matchers.as_deref().unwrap_or(&[])
    }

    /// Parsed window start, `None` if the string is unparseable
    pub fn starts_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.starts_at)
    }

    /// Parsed window end, `None` if the string is unparseable
    pub fn ends_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.ends_at)
    }
}

/// Parse a backend timestamp string, returning `None` on failure
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silence(starts_at: &str, ends_at: &str) -> Silence {
        Silence {
            id: "s1".to_string(),
            matchers: None,
            status: SilenceStatus {
                state: SilenceState::Active,
            },
            starts_at: starts_at.to_string(),
            ends_at: ends_at.to_string(),
            comment: None,
            created_by: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_state_wire_form() {
        let status: SilenceStatus = serde_json::from_str(r#"{"state": "pending"}"#).unwrap();
        assert_eq!(status.state, SilenceState::Pending);
        assert!(!status.state.is_expired());
        assert!(SilenceState::Expired.is_expired());
    }

    #[test]
    fn test_absent_matchers_are_empty() {
        let s = silence("2024-01-01T00:00:00Z", "2024-01-05T00:00:00Z");
        assert!(s.matchers().is_empty());
    }

    #[test]
    fn test_timestamp_parsing() {
        let s = silence("2024-01-01T00:00:00Z", "not-a-date");
        assert!(s.starts_at_time().is_some());
        assert!(s.ends_at_time().is_none());
    }

    #[test]
    fn test_timestamp_offset_normalized_to_utc() {
        let t = parse_timestamp("2024-01-01T02:00:00+02:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
