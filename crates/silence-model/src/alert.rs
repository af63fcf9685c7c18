//! Alert entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Alert status as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    /// Backend state string (e.g. "active", "suppressed")
    #[serde(default)]
    pub state: Option<String>,

    /// Ids of the silences currently suppressing this alert
    #[serde(default)]
    pub silenced_by: Vec<String>,
}

/// An alert instance as reported by the alert-management backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Identifying label set
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Current status, including which silences suppress it
    #[serde(default)]
    pub status: AlertStatus,
}

impl Alert {
    /// Whether the given silence currently suppresses this alert
    pub fn is_silenced_by(&self, silence_id: &str) -> bool {
        self.status.silenced_by.iter().any(|id| id == silence_id)
    }
}
