//! Core data model for the Verrocchio eval console.
//!
//! Verrocchio is a privileged remote-eval console embedded in a Discord
//! bot: an authorized operator sends a message containing a JavaScript
//! snippet, the bot executes it against the live application context and
//! reports the returned value, captured output, and any failure.
//!
//! This crate holds the engine-free data model shared between the
//! evaluation harness and the transport:
//! - [`EvalCommand`] — one inbound operator command
//! - [`CodePayload`] — the extracted snippet (the command extractor)
//! - [`ExecutionOutcome`] — tagged result of one evaluation
//! - [`EvalReport`] / [`Reaction`] — the rendered, bounded report
//! - [`HostAction`] — deferred outbound effects queued by the snippet

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod command;
mod outcome;
mod payload;
mod report;

pub use action::HostAction;
pub use command::EvalCommand;
pub use outcome::ExecutionOutcome;
pub use payload::CodePayload;
pub use report::{EvalReport, Reaction};
