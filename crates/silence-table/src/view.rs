//! Table view façade
//!
//! Single entry point for the external table renderer: binds filtering,
//! correlation, and row/column composition into one display-ready value.

use crate::columns::{compose_columns, ColumnSpec};
use crate::filter::{filter_silences, QueryValue};
use crate::rows::{compose_content, TableContent};
use silence_model::{Alert, Silence};
use tracing::debug;

/// Everything the core needs for one recomputation
pub struct TableRequest<'a> {
    /// All known silences
    pub silences: &'a [Silence],
    /// All known alerts
    pub alerts: &'a [Alert],
    /// Optional `silenceIds` query parameter
    pub silence_ids: Option<&'a QueryValue>,
    /// Whether the caller holds editor capability
    pub is_editor: bool,
    /// Backend instance in scope; opaque, passed through to actions
    pub alertmanager_source_name: &'a str,
}

/// Display-ready table: ordered columns plus row content
#[derive(Debug, Clone, PartialEq)]
pub struct SilenceTableView {
    pub columns: Vec<ColumnSpec>,
    pub content: TableContent,
    /// Carried through for cell rendering of the actions column
    pub alertmanager_source_name: String,
}

impl SilenceTableView {
    /// Recompute the view from scratch.
    ///
    /// Pure except for logging; call again whenever any input changes.
    pub fn build(request: &TableRequest<'_>) -> Self {
        let filtered = filter_silences(request.silences, request.silence_ids);
        debug!(
            total = request.silences.len(),
            filtered = filtered.len(),
            is_editor = request.is_editor,
            "Composing silence table"
        );

        Self {
            columns: compose_columns(request.is_editor),
            content: compose_content(request.silences.len(), &filtered, request.alerts),
            alertmanager_source_name: request.alertmanager_source_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{LinkTarget, RowActions};
    use crate::columns::CellValue;
    use silence_model::{AlertStatus, SilenceState, SilenceStatus};

    fn silence(id: &str, state: SilenceState) -> Silence {
        Silence {
            id: id.to_string(),
            matchers: Some(Vec::new()),
            status: SilenceStatus { state },
            starts_at: "2024-01-01T00:00:00Z".to_string(),
            ends_at: "2024-01-05T00:00:00Z".to_string(),
            comment: None,
            created_by: None,
            updated_at: None,
        }
    }

    fn alert(silenced_by: &[&str]) -> Alert {
        Alert {
            labels: Default::default(),
            status: AlertStatus {
                state: None,
                silenced_by: silenced_by.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_editor_scenario_end_to_end() {
        let silences = vec![silence("a", SilenceState::Active)];
        let alerts = vec![alert(&["a"])];
        let view = SilenceTableView::build(&TableRequest {
            silences: &silences,
            alerts: &alerts,
            silence_ids: None,
            is_editor: true,
            alertmanager_source_name: "grafana",
        });

        assert_eq!(view.columns.len(), 5);
        let rows = match &view.content {
            TableContent::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        };
        assert_eq!(rows.len(), 1);

        let cells: Vec<CellValue> = view
            .columns
            .iter()
            .map(|c| c.render(&rows[0], &view.alertmanager_source_name))
            .collect();

        assert_eq!(cells[0], CellValue::StateTag(SilenceState::Active));
        assert_eq!(cells[1], CellValue::Matchers(Vec::new()));
        assert_eq!(cells[2], CellValue::AlertCount(1));
        assert_eq!(
            cells[3],
            CellValue::Schedule {
                starts_at: Some("2024-01-01 00:00".to_string()),
                ends_at: Some("2024-01-05 00:00".to_string()),
            }
        );
        match &cells[4] {
            CellValue::Actions(RowActions::Editable { unsilence, edit }) => {
                assert_eq!(unsilence.silence_id, "a");
                assert!(matches!(edit, LinkTarget::EditSilence { .. }));
            }
            other => panic!("expected unsilence + edit, got {:?}", other),
        }
    }

    #[test]
    fn test_viewer_never_sees_actions() {
        let silences = vec![silence("a", SilenceState::Active)];
        let view = SilenceTableView::build(&TableRequest {
            silences: &silences,
            alerts: &[],
            silence_ids: None,
            is_editor: false,
            alertmanager_source_name: "grafana",
        });
        assert_eq!(view.columns.len(), 4);
        assert!(view.columns.iter().all(|c| c.id != "actions"));
    }

    #[test]
    fn test_filtered_view() {
        let silences = vec![
            silence("a", SilenceState::Active),
            silence("b", SilenceState::Pending),
        ];
        let query = QueryValue::Single("b,c".to_string());
        let view = SilenceTableView::build(&TableRequest {
            silences: &silences,
            alerts: &[],
            silence_ids: Some(&query),
            is_editor: false,
            alertmanager_source_name: "grafana",
        });
        match view.content {
            TableContent::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].silence.id, "b");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_states_are_distinct() {
        let no_silences = SilenceTableView::build(&TableRequest {
            silences: &[],
            alerts: &[],
            silence_ids: None,
            is_editor: false,
            alertmanager_source_name: "grafana",
        });
        assert_eq!(no_silences.content, TableContent::NoSilences);

        let silences = vec![silence("a", SilenceState::Active)];
        let query = QueryValue::Single("zzz".to_string());
        let no_matches = SilenceTableView::build(&TableRequest {
            silences: &silences,
            alerts: &[],
            silence_ids: Some(&query),
            is_editor: false,
            alertmanager_source_name: "grafana",
        });
        assert_eq!(no_matches.content, TableContent::NoMatches);
    }

    #[test]
    fn test_expired_row_recreates_regardless_of_editor() {
        let silences = vec![silence("a", SilenceState::Expired)];
        let view = SilenceTableView::build(&TableRequest {
            silences: &silences,
            alerts: &[],
            silence_ids: None,
            is_editor: true,
            alertmanager_source_name: "grafana",
        });
        let rows = match &view.content {
            TableContent::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        };
        let actions = view.columns[4].render(&rows[0], "grafana");
        assert!(matches!(
            actions,
            CellValue::Actions(RowActions::Recreate { .. })
        ));
    }
}
