//! Inbound operator command.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inbound operator command, created per message and discarded after
/// processing. Carries everything the harness binds into the execution
/// context: the originating message and its channel/guild/author
/// identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalCommand {
    /// Discord message ID of the originating message.
    pub message_id: u64,
    /// Author (operator) user ID.
    pub author_id: u64,
    /// Author display name, bound into the snippet context.
    pub author_name: String,
    /// Channel the command arrived in.
    pub channel_id: u64,
    /// Guild the command arrived in, if any (DMs have none).
    pub guild_id: Option<u64>,
    /// Full raw message content, prefix and fences included.
    pub raw_text: String,
    /// When the command was received.
    pub created_at: DateTime<Utc>,
}

impl EvalCommand {
    /// Build a synthetic command for local (non-Discord) evaluation,
    /// used by the `eval` CLI subcommand and by tests.
    pub fn local(raw_text: impl Into<String>) -> Self {
        Self {
            message_id: 0,
            author_id: 0,
            author_name: "operator".to_string(),
            channel_id: 0,
            guild_id: None,
            raw_text: raw_text.into(),
            created_at: Utc::now(),
        }
    }
}
