//! Verrocchio: a privileged remote-eval console for Discord.
//!
//! A chat message beginning with the configured invocation token (by
//! default `.eval`) submits a JavaScript snippet for execution inside
//! the bot process, with the live message context bound into scope. Only
//! application owners pass the gate; everyone else gets silence.
//!
//! This crate is the facade: CLI, configuration, and the binary that
//! wires the harness to the Discord transport. The working parts live
//! in the member crates:
//!
//! - `verrocchio_core` — command, payload, outcome, and report types
//! - `verrocchio_harness` — the embedded-interpreter evaluation harness
//! - `verrocchio_discord` — the Serenity transport
//! - `verrocchio_error` — foundation error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod config;

pub use cli::{Cli, Commands};
pub use config::VerrocchioConfig;

// Re-exports so binary users need only this crate.
pub use verrocchio_core::{
    CodePayload, EvalCommand, EvalReport, ExecutionOutcome, HostAction, Reaction,
};
pub use verrocchio_discord::VerrocchioBot;
pub use verrocchio_harness::{EvalHarness, HostIdentity, ReportLimits};
