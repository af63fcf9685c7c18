//! Command Dispatch Module
//!
//! Decouples the table core from whatever state-management layer actually
//! executes mutations. The core hands an [`ExpireSilenceCommand`] to an
//! injected [`CommandDispatcher`] and moves on; resolution (success,
//! failure, retries) is entirely the collaborator's business.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Dispatch error types
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The receiving side of the command channel is gone
    #[error("Command channel closed")]
    ChannelClosed,
}

/// Request to expire a silence on a given alert-management backend.
///
/// The source name is opaque to this crate; it is carried through
/// unchanged so the executing layer can route the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpireSilenceCommand {
    /// Backend instance the silence lives on
    pub alertmanager_source_name: String,
    /// Id of the silence to expire
    pub silence_id: String,
}

impl ExpireSilenceCommand {
    /// Create an expire command for a silence on the given backend
    pub fn new(alertmanager_source_name: impl Into<String>, silence_id: impl Into<String>) -> Self {
        Self {
            alertmanager_source_name: alertmanager_source_name.into(),
            silence_id: silence_id.into(),
        }
    }
}

/// Seam for handing commands to the external command/state layer.
///
/// `dispatch` is fire-and-forget: implementations must not block the
/// caller, and the caller never observes the outcome.
pub trait CommandDispatcher: Send + Sync {
    /// Hand a command to the executing layer
    fn dispatch(&self, command: ExpireSilenceCommand);
}

/// Channel-backed dispatcher handing commands to an async consumer
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<ExpireSilenceCommand>,
}

impl ChannelDispatcher {
    /// Create a dispatcher and the receiving end for the consumer task
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ExpireSilenceCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send a command, surfacing channel failure to the caller
    pub fn try_send(&self, command: ExpireSilenceCommand) -> Result<(), DispatchError> {
        self.tx
            .send(command)
            .map_err(|_| DispatchError::ChannelClosed)
    }
}

impl CommandDispatcher for ChannelDispatcher {
    fn dispatch(&self, command: ExpireSilenceCommand) {
        debug!(
            silence_id = %command.silence_id,
            source = %command.alertmanager_source_name,
            "Dispatching expire command"
        );
        if let Err(e) = self.try_send(command) {
            // Fire-and-forget: the command is dropped, the UI will catch
            // up on the next refresh with fresh backend state.
            warn!("Expire command dropped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_command_reaches_consumer() {
        let (dispatcher, mut rx) = ChannelDispatcher::new();
        dispatcher.dispatch(ExpireSilenceCommand::new("grafana", "s1"));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.silence_id, "s1");
        assert_eq!(received.alertmanager_source_name, "grafana");
    }

    #[tokio::test]
    async fn test_closed_channel_drops_command() {
        let (dispatcher, rx) = ChannelDispatcher::new();
        drop(rx);

        // dispatch must not panic or block
        dispatcher.dispatch(ExpireSilenceCommand::new("grafana", "s1"));
        assert!(matches!(
            dispatcher.try_send(ExpireSilenceCommand::new("grafana", "s2")),
            Err(DispatchError::ChannelClosed)
        ));
    }
}
