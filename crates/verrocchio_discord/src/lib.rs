//! Discord transport for the Verrocchio eval console.
//!
//! This crate connects the evaluation harness to Discord using the
//! Serenity library. It owns everything transport-shaped:
//!
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: event handler implementing Serenity's EventHandler
//!   trait, including the owner gate and report delivery
//! - **error**: Discord-specific error types
//!
//! The handler walks one gate order per message: bot authors dropped,
//! owner gate, prefix extraction. Only messages that pass all three
//! reach the harness; everything that falls out earlier exits silently.
//!
//! ```rust,ignore
//! use verrocchio_discord::VerrocchioBot;
//! use verrocchio_harness::ReportLimits;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut bot = VerrocchioBot::new(
//!         std::env::var("DISCORD_TOKEN")?,
//!         ".",
//!         "eval",
//!         ReportLimits::default(),
//!     )
//!     .await?;
//!     bot.start().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod error;
mod handler;

pub use client::VerrocchioBot;
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use handler::EvalHandler;
