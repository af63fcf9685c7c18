//! Alert correlation
//!
//! Maps a silence id to the alerts it currently suppresses. The linear
//! scan is O(alerts) per silence; [`AlertIndex`] pre-buckets alerts by
//! silence id so correlating N silences against M alerts costs O(N + M)
//! instead of O(N * M).

use silence_model::Alert;
use std::collections::HashMap;

/// Alerts whose `silenced_by` set contains the given silence id, in
/// input order.
pub fn silenced_alerts<'a>(silence_id: &str, alerts: &'a [Alert]) -> Vec<&'a Alert> {
    alerts
        .iter()
        .filter(|a| a.is_silenced_by(silence_id))
        .collect()
}

/// Alerts bucketed by the silences suppressing them
pub struct AlertIndex<'a> {
    by_silence: HashMap<&'a str, Vec<&'a Alert>>,
}

impl<'a> AlertIndex<'a> {
    /// Build the index in one pass over the alerts
    pub fn build(alerts: &'a [Alert]) -> Self {
        let mut by_silence: HashMap<&str, Vec<&Alert>> = HashMap::new();
        for alert in alerts {
            for silence_id in &alert.status.silenced_by {
                let bucket = by_silence.entry(silence_id.as_str()).or_default();
                // The backend may repeat an id within one alert's
                // silenced_by; each alert belongs in a bucket at most
                // once. Alerts are processed one at a time, so a tail
                // check is enough.
                if bucket.last().map_or(false, |last| std::ptr::eq(*last, alert)) {
                    continue;
                }
                bucket.push(alert);
            }
        }
        Self { by_silence }
    }

    /// Alerts suppressed by the given silence, input order preserved
    pub fn silenced_by(&self, silence_id: &str) -> &[&'a Alert] {
        self.by_silence
            .get(silence_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
