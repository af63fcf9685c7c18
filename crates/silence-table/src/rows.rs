//! Row composition

use crate::correlate::AlertIndex;
use silence_model::{Alert, Silence};

/// A silence joined with the alerts it currently suppresses.
///
/// Built fresh on every recomputation; never cached across input
/// changes. `silenced_alerts` holds exactly the alerts whose
/// `silenced_by` contains this silence's id, input order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct SilenceTableItem {
    pub silence: Silence,
    pub silenced_alerts: Vec<Alert>,
}

/// What the table should display.
///
/// An empty silence input is a different situation from a filter that
/// matched nothing; the presentation layer shows different affordances
/// for each.
#[derive(Debug, Clone, PartialEq)]
pub enum TableContent {
    /// No silences exist at all
    NoSilences,
    /// Silences exist but the id filter matched none of them
    NoMatches,
    /// Display-ready rows
    Rows(Vec<SilenceTableItem>),
}

/// Pair each filtered silence with its correlated alerts
pub fn compose_rows(filtered: &[&Silence], alerts: &[Alert]) -> Vec<SilenceTableItem> {
    let index = AlertIndex::build(alerts);
    filtered
        .iter()
        .map(|silence| SilenceTableItem {
            silence: (*silence).clone(),
            silenced_alerts: index
                .silenced_by(&silence.id)
                .iter()
                .map(|a| (*a).clone())
                .collect(),
        })
        .collect()
}

/// Compose rows and classify the empty cases
pub fn compose_content(
    total_silences: usize,
    filtered: &[&Silence],
    alerts: &[Alert],
) -> TableContent {
    if total_silences == 0 {
        return TableContent::NoSilences;
    }
    if filtered.is_empty() {
        return TableContent::NoMatches;
    }
    TableContent::Rows(compose_rows(filtered, alerts))
}
