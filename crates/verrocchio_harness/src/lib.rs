//! Evaluation harness for the Verrocchio eval console.
//!
//! The harness accepts an extracted [`verrocchio_core::CodePayload`],
//! builds a fresh interpreter context bound to the live request
//! (the context binder), wraps the snippet as a uniquely-named
//! zero-argument `async function` (the deferred execution wrapper),
//! invokes it under output capture, classifies the outcome, and renders
//! a bounded report.
//!
//! # Architecture
//!
//! - **binder**: the enumerated capability table injected per invocation
//! - **unit**: define-then-invoke wrapping of the snippet
//! - **capture**: output capture buffer and the `eprint` diagnostic
//! - **report**: bounded, truncation-safe report rendering
//! - **harness**: orchestration; bridges the `!Send` engine onto
//!   blocking workers so evaluations never block the gateway loop
//!
//! # Example
//!
//! ```no_run
//! use verrocchio_core::{CodePayload, EvalCommand};
//! use verrocchio_harness::{EvalHarness, HostIdentity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let harness = EvalHarness::new(HostIdentity::local());
//!     let command = EvalCommand::local(".eval 1+1");
//!     let payload = CodePayload::from_code("1+1");
//!     let outcome = harness.evaluate(command, payload).await?;
//!     println!("{}", harness.render(&outcome).description);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod binder;
mod capture;
mod error;
mod harness;
mod report;
mod unit;

pub use binder::{BOUND_NAMES, HostIdentity};
pub use error::{HarnessError, HarnessErrorKind, HarnessResult};
pub use harness::EvalHarness;
pub use report::{ReportLimits, render};
