//! Silence Table Core
//!
//! Data binding for the silences screen of an alerting UI:
//! - Filtering silences by the `silenceIds` query parameter
//! - Correlating each silence with the alerts it currently suppresses
//! - Composing role-gated columns and per-row actions
//!
//! Everything here is a pure function of its inputs, recomputed on input
//! change. The only outbound effect is the expire command handed to the
//! injected dispatcher; markup, URLs, and layout are external
//! collaborators fed by the [`SilenceTableView`] this crate produces.

mod actions;
mod columns;
mod correlate;
mod filter;
mod rows;
mod view;

pub use actions::{LinkBuilder, LinkTarget, RowActions};
pub use columns::{compose_columns, CellValue, ColumnKind, ColumnSpec};
pub use correlate::{silenced_alerts, AlertIndex};
pub use filter::{filter_silences, QueryValue};
pub use rows::{compose_content, compose_rows, SilenceTableItem, TableContent};
pub use view::{SilenceTableView, TableRequest};
