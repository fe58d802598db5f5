//! Deferred outbound effects queued by a snippet.

use serde::{Deserialize, Serialize};

/// An outbound effect the snippet requested through the capability
/// table (`bot.say(...)`, `bot.react(...)`).
///
/// Capability calls are recorded during the single-threaded interpreter
/// run and flushed by the async transport once the evaluation has
/// completed successfully; a failed run's partial queue is dropped.
///
/// The serde shape matches the interpreter-side queue entries
/// (`{ "action": "say", "content": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    /// Send a plain message to the originating channel.
    Say {
        /// Message content.
        content: String,
    },
    /// Attach a reaction to the originating message.
    React {
        /// Unicode reaction glyph.
        glyph: String,
    },
}
