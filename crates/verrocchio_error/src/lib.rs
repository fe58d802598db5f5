//! Error types for the Verrocchio eval console.
//!
//! This crate provides the foundation error types shared across the
//! Verrocchio workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Crate-local errors (harness, Discord) live in their own crates and
//! follow the same pattern; only cross-cutting errors live here.
//!
//! # Examples
//!
//! ```
//! use verrocchio_error::{VerrocchioResult, ConfigError};
//!
//! fn load_token() -> VerrocchioResult<String> {
//!     Err(ConfigError::new("no token configured"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("token length {}", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;

pub use config::ConfigError;
pub use error::{VerrocchioError, VerrocchioErrorKind, VerrocchioResult};
