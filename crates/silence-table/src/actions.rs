//! Per-row action state machine
//!
//! The action set is a pure function of the silence's current lifecycle
//! state, re-derived on every render. Issuing an expire command is a
//! request to the backend, never a local state transition; the row only
//! changes once fresh silence data arrives.

use command_dispatch::{CommandDispatcher, ExpireSilenceCommand};
use silence_model::Silence;
use tracing::debug;

/// A navigation target the core wants a link for.
///
/// URL formatting belongs to the external [`LinkBuilder`]; the core only
/// decides whether a link exists and what it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Edit view for an existing, still-mutable silence
    EditSilence {
        alertmanager_source_name: String,
        silence_id: String,
    },
    /// New-silence view pre-populated from an expired silence
    NewFromSilence {
        alertmanager_source_name: String,
        silence_id: String,
    },
}

/// Seam for the external link-building collaborator
pub trait LinkBuilder {
    /// Format a URL for the given target
    fn url_for(&self, target: &LinkTarget) -> String;
}

/// Actions available on a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowActions {
    /// Pending or active silence: expire it, or edit it
    Editable {
        unsilence: ExpireSilenceCommand,
        edit: LinkTarget,
    },
    /// Expired silence: the only move is recreating it
    Recreate { recreate: LinkTarget },
}

impl RowActions {
    /// Derive the action set for a silence's current state
    pub fn for_silence(silence: &Silence, alertmanager_source_name: &str) -> Self {
        if silence.status.state.is_expired() {
            RowActions::Recreate {
                recreate: LinkTarget::NewFromSilence {
                    alertmanager_source_name: alertmanager_source_name.to_string(),
                    silence_id: silence.id.clone(),
                },
            }
        } else {
            RowActions::Editable {
                unsilence: ExpireSilenceCommand::new(alertmanager_source_name, &silence.id),
                edit: LinkTarget::EditSilence {
                    alertmanager_source_name: alertmanager_source_name.to_string(),
                    silence_id: silence.id.clone(),
                },
            }
        }
    }

    /// Issue the unsilence command, if this row has one.
    ///
    /// Fire-and-forget: returns whether a command was dispatched, never
    /// its outcome.
    pub fn unsilence(&self, dispatcher: &dyn CommandDispatcher) -> bool {
        match self {
            RowActions::Editable { unsilence, .. } => {
                debug!(silence_id = %unsilence.silence_id, "Unsilence requested");
                dispatcher.dispatch(unsilence.clone());
                true
            }
            RowActions::Recreate { .. } => false,
        }
    }
}
