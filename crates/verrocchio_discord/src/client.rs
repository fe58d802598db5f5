//! Discord bot client setup and lifecycle management.

use crate::error::{DiscordError, DiscordErrorKind, DiscordResult};
use crate::handler::EvalHandler;
use serenity::Client;
use tracing::{info, instrument};
use verrocchio_harness::ReportLimits;

/// The Verrocchio Discord bot.
///
/// Wraps the Serenity client with the eval console's event handler.
///
/// # Example
/// ```no_run
/// use verrocchio_discord::VerrocchioBot;
/// use verrocchio_harness::ReportLimits;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("DISCORD_TOKEN")?;
///     let mut bot = VerrocchioBot::new(token, ".", "eval", ReportLimits::default()).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct VerrocchioBot {
    /// Serenity client instance.
    client: Client,
}

impl VerrocchioBot {
    /// Create a new bot instance.
    ///
    /// # Errors
    /// Returns an error if the bot token is rejected or the Serenity
    /// client fails to initialize.
    #[instrument(skip(token, prefix, command, limits), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        prefix: impl Into<String>,
        command: impl Into<String>,
        limits: ReportLimits,
    ) -> DiscordResult<Self> {
        if token.trim().is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken));
        }

        let handler = EvalHandler::new(prefix, command, limits);
        let intents = EvalHandler::intents();
        info!(?intents, "building Serenity client");

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "failed to build client: {e}"
                )))
            })?;

        Ok(Self { client })
    }

    /// Start the bot.
    ///
    /// Blocks until the bot is shut down or hits a fatal gateway error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("starting eval console");
        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "client error: {e}"
            )))
        })?;
        Ok(())
    }
}
