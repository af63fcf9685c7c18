//! Column composition and cell rendering

use crate::actions::RowActions;
use crate::rows::SilenceTableItem;
use chrono::{DateTime, Utc};
use silence_model::SilenceState;

/// Format used for schedule bounds
const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The kinds of column the table can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    State,
    Matchers,
    AlertCount,
    Schedule,
    Actions,
}

/// A column descriptor handed to the external table renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Unique within a render
    pub id: &'static str,
    /// Header label
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// A rendered cell, ready for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Lifecycle state tag
    StateTag(SilenceState),
    /// Display strings of the silence's matchers
    Matchers(Vec<String>),
    /// Number of alerts this silence currently suppresses
    AlertCount(usize),
    /// Formatted window bounds; an unparseable bound renders as `None`
    Schedule {
        starts_at: Option<String>,
        ends_at: Option<String>,
    },
    /// Role-gated row actions
    Actions(RowActions),
}

/// Build the ordered column set.
///
/// Fixed order: state, matching labels, alert count, schedule. The
/// actions column is appended iff the caller has editor capability.
pub fn compose_columns(is_editor: bool) -> Vec<ColumnSpec> {
    let mut columns = vec![
        ColumnSpec {
            id: "state",
            label: "State",
            kind: ColumnKind::State,
        },
        ColumnSpec {
            id: "matchers",
            label: "Matching labels",
            kind: ColumnKind::Matchers,
        },
        ColumnSpec {
            id: "alerts",
            label: "Alerts",
            kind: ColumnKind::AlertCount,
        },
        ColumnSpec {
            id: "schedule",
            label: "Schedule",
            kind: ColumnKind::Schedule,
        },
    ];
    if is_editor {
        columns.push(ColumnSpec {
            id: "actions",
            label: "Actions",
            kind: ColumnKind::Actions,
        });
    }
    columns
}

impl ColumnSpec {
    /// Render this column's cell for a row
    pub fn render(&self, item: &SilenceTableItem, alertmanager_source_name: &str) -> CellValue {
        match self.kind {
            ColumnKind::State => CellValue::StateTag(item.silence.status.state),
            ColumnKind::Matchers => CellValue::Matchers(
                item.silence
                    .matchers()
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            ),
            ColumnKind::AlertCount => CellValue::AlertCount(item.silenced_alerts.len()),
            ColumnKind::Schedule => CellValue::Schedule {
                starts_at: item.silence.starts_at_time().map(format_schedule_time),
                ends_at: item.silence.ends_at_time().map(format_schedule_time),
            },
            ColumnKind::Actions => CellValue::Actions(RowActions::for_silence(
                &item.silence,
                alertmanager_source_name,
            )),
        }
    }
}

fn format_schedule_time(t: DateTime<Utc>) -> String {
    t.format(SCHEDULE_TIME_FORMAT).to_string()
}
