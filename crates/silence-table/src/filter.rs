//! Silence filtering from query parameters

use serde::Deserialize;
use silence_model::Silence;

/// A query-parameter value as produced by a permissive query parser.
///
/// Routers commonly hand back either a single string or, when the
/// parameter is repeated, a list of strings. Only the single-string form
/// carries a silence-id filter; anything else means "no filter".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

/// Select the silences whose id appears in the comma-separated
/// `silence_ids` query parameter, preserving input order.
///
/// An absent or non-string parameter is an identity pass-through. An
/// empty string yields an empty result (every id check fails). Duplicate
/// ids in the list are accepted silently; silence ids are unique, so
/// repetition has no effect.
pub fn filter_silences<'a>(
    silences: &'a [Silence],
    silence_ids: Option<&QueryValue>,
) -> Vec<&'a Silence> {
    match silence_ids {
        Some(QueryValue::Single(ids)) => {
            let wanted: Vec<&str> = ids.split(',').collect();
            silences
                .iter()
                .filter(|s| wanted.contains(&s.id.as_str()))
                .collect()
        }
        _ => silences.iter().collect(),
    }
}
