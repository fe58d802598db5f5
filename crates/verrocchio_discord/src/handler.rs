//! Serenity event handler for the eval console.
//!
//! Every inbound message walks the same gate order: bot authors are
//! dropped, then the owner gate, then prefix extraction. The first two
//! exits are silent on purpose; non-owner and non-command traffic is
//! expected, not an error.

use crate::error::{DiscordError, DiscordErrorKind, DiscordResult};
use chrono::Utc;
use serenity::all::{
    Colour, Context, CreateEmbed, CreateMessage, Message, ReactionType, Ready, UserId,
};
use serenity::async_trait;
use serenity::client::EventHandler;
use serenity::model::gateway::GatewayIntents;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, trace};
use verrocchio_core::{CodePayload, EvalCommand, EvalReport, ExecutionOutcome, HostAction};
use verrocchio_harness::{EvalHarness, HostIdentity, ReportLimits};

/// Event handler for the Verrocchio eval console.
///
/// Holds the evaluation harness and the owner set. Both are populated
/// at `ready`: the harness gets the connected bot's identity and the
/// owner set is fetched once from the Discord application info.
pub struct EvalHandler {
    /// Command prefix, e.g. `.`.
    prefix: String,
    /// Command name, e.g. `eval`.
    command: String,
    /// Report bounds applied to every rendered report.
    limits: ReportLimits,
    /// The harness, rebuilt at `ready` with the live bot identity.
    harness: RwLock<EvalHarness>,
    /// Application owner and team member IDs, fetched at `ready`.
    owners: RwLock<HashSet<UserId>>,
}

impl EvalHandler {
    /// Create a handler for the given prefix and command name.
    pub fn new(prefix: impl Into<String>, command: impl Into<String>, limits: ReportLimits) -> Self {
        Self {
            prefix: prefix.into(),
            command: command.into(),
            limits,
            harness: RwLock::new(EvalHarness::new(HostIdentity::local()).with_limits(limits)),
            owners: RwLock::new(HashSet::new()),
        }
    }

    /// Required gateway intents for the bot.
    ///
    /// Message content is required; the command arrives as plain text.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Whether the given user may evaluate code.
    pub async fn is_owner(&self, user_id: UserId) -> bool {
        self.owners.read().await.contains(&user_id)
    }

    /// Record a user as an owner.
    ///
    /// Called from `ready` with the application info; exposed for tests.
    pub async fn insert_owner(&self, user_id: UserId) {
        self.owners.write().await.insert(user_id);
    }

    /// Send the embed reply and land the outcome reaction.
    async fn deliver(&self, ctx: &Context, msg: &Message, report: &EvalReport) -> DiscordResult<()> {
        let (r, g, b) = report.colour;
        let embed = CreateEmbed::new()
            .title(report.title.clone())
            .description(report.description.clone())
            .colour(Colour::from_rgb(r, g, b));
        let reply = CreateMessage::new().embed(embed).reference_message(msg);

        msg.channel_id
            .send_message(&ctx.http, reply)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ReportDeliveryFailed(e.to_string()))
            })?;

        msg.react(&ctx.http, ReactionType::Unicode(report.reaction.glyph().to_string()))
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::ReactionFailed(e.to_string())))?;

        Ok(())
    }

    /// Flush the actions a successful snippet queued through the host
    /// handle. Delivery failures are logged and do not stop the rest of
    /// the queue.
    async fn flush_actions(&self, ctx: &Context, msg: &Message, actions: &[HostAction]) {
        for action in actions {
            let result = match action {
                HostAction::Say { content } => msg
                    .channel_id
                    .say(&ctx.http, content)
                    .await
                    .map(|_| ()),
                HostAction::React { glyph } => msg
                    .react(&ctx.http, ReactionType::Unicode(glyph.clone()))
                    .await
                    .map(|_| ()),
            };
            if let Err(e) = result {
                error!(?action, error = %e, "queued action failed to deliver");
            }
        }
    }
}

#[async_trait]
impl EventHandler for EvalHandler {
    /// Capture the bot identity and fetch the owner set.
    #[instrument(skip(self, ctx, ready), fields(bot = %ready.user.name))]
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(bot_id = ready.user.id.get(), "connected to Discord");

        let identity = HostIdentity::new(ready.user.id.get(), ready.user.name.clone());
        *self.harness.write().await = EvalHarness::new(identity).with_limits(self.limits);

        match ctx.http.get_current_application_info().await {
            Ok(info) => {
                let mut owners = self.owners.write().await;
                if let Some(owner) = info.owner {
                    owners.insert(owner.id);
                }
                if let Some(team) = info.team {
                    for member in team.members {
                        owners.insert(member.user.id);
                    }
                }
                info!(owner_count = owners.len(), "owner set populated");
            }
            Err(e) => {
                // Without the owner set every message fails the gate,
                // so the console is locked shut rather than open.
                error!(error = %e, "failed to fetch application info");
            }
        }
    }

    /// Gate, extract, evaluate, report.
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if !self.is_owner(msg.author.id).await {
            trace!(author_id = msg.author.id.get(), "author failed the owner gate");
            return;
        }
        let Some(payload) = CodePayload::extract(&msg.content, &self.prefix, &self.command)
        else {
            return;
        };

        debug!(
            author_id = msg.author.id.get(),
            channel_id = msg.channel_id.get(),
            "eval command accepted"
        );

        let command = EvalCommand {
            message_id: msg.id.get(),
            author_id: msg.author.id.get(),
            author_name: msg.author.name.clone(),
            channel_id: msg.channel_id.get(),
            guild_id: msg.guild_id.map(|id| id.get()),
            raw_text: msg.content.clone(),
            created_at: Utc::now(),
        };

        let harness = self.harness.read().await.clone();
        let outcome = match harness.evaluate(command, payload).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "harness infrastructure failure");
                return;
            }
        };

        let report = harness.render(&outcome);
        if let Err(e) = self.deliver(&ctx, &msg, &report).await {
            // Never report about a failed report.
            error!(error = %e, "report delivery failed");
            return;
        }

        if let ExecutionOutcome::Success { actions, .. } = &outcome {
            self.flush_actions(&ctx, &msg, actions).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> EvalHandler {
        EvalHandler::new(".", "eval", ReportLimits::default())
    }

    #[tokio::test]
    async fn owner_set_starts_empty() {
        let handler = handler();
        assert!(!handler.is_owner(UserId::new(1)).await);
    }

    #[tokio::test]
    async fn inserted_owner_passes_the_gate() {
        let handler = handler();
        handler.insert_owner(UserId::new(7)).await;
        assert!(handler.is_owner(UserId::new(7)).await);
        assert!(!handler.is_owner(UserId::new(8)).await);
    }

    #[test]
    fn intents_include_message_content() {
        let intents = EvalHandler::intents();
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::DIRECT_MESSAGES));
    }
}
