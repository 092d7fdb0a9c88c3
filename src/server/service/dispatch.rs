//! Slash command dispatch.
//!
//! Routes a [`CommandInvocation`] to its response builder and performs the side
//! effects through a [`Responder`]. Unknown commands and malformed invocations are
//! dropped without replying.

use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::command::{Command, CommandInvocation, CommandParseError},
    service::{
        giveaway_timer::GiveawayTimerService,
        responder::Responder,
        response::{
            announcement::{announcement, announcement_ack},
            fake::fake_message,
            giveaway::giveaway,
            server_info::server_info,
            ticket::ticket_panel,
        },
    },
    util::duration::parse_duration,
};

/// Dispatches slash commands to their handlers.
#[derive(Clone, Default)]
pub struct CommandDispatcher {
    timers: GiveawayTimerService,
}

impl CommandDispatcher {
    /// Creates a dispatcher that registers giveaway timers with `timers`.
    pub fn new(timers: GiveawayTimerService) -> Self {
        Self { timers }
    }

    /// Timer service used for giveaways.
    #[cfg(test)]
    pub(crate) fn timers(&self) -> &GiveawayTimerService {
        &self.timers
    }

    /// Handles a single slash command invocation.
    ///
    /// Parses the invocation and replies through `responder`:
    /// - `sendembed` - Private acknowledgement, then the announcement in the channel
    /// - `giveaway` - Public reply with a join button, plus a timer that ends it
    /// - `ticket` - Public reply with the ticket panel
    /// - `fake` - Public plain-text reply
    /// - `serverinfo` - Private guild summary; skipped outside a cached guild
    ///
    /// Unknown names and missing options are logged and produce no reply.
    ///
    /// # Arguments
    /// - `invocation` - The parsed-from-Discord invocation
    /// - `responder` - Reply handle bound to the same interaction
    ///
    /// # Returns
    /// - `Ok(())` - Command handled or deliberately ignored
    /// - `Err(AppError::DiscordErr)` - A reply or send failed; no timer is scheduled
    ///   if the giveaway reply itself failed
    pub async fn dispatch(
        &self,
        invocation: &CommandInvocation,
        responder: Arc<dyn Responder>,
    ) -> Result<(), AppError> {
        let command = match Command::parse(invocation) {
            Ok(command) => command,
            Err(e @ CommandParseError::UnknownCommand(_)) => {
                tracing::debug!("Ignoring interaction {}: {}", invocation.id, e);
                return Ok(());
            }
            Err(e @ CommandParseError::MissingOption { .. }) => {
                tracing::warn!("Ignoring interaction {}: {}", invocation.id, e);
                return Ok(());
            }
        };

        tracing::debug!(
            "Handling /{} for interaction {}",
            command.name().as_str(),
            invocation.id
        );

        match command {
            Command::SendEmbed { message } => {
                responder.reply(&announcement_ack()).await?;
                responder.send(&announcement(&message)).await?;
            }
            Command::Giveaway { title, duration } => {
                responder.reply(&giveaway(&title)).await?;

                let delay = parse_duration(&duration);
                if delay.is_zero() {
                    tracing::debug!(
                        "Giveaway duration '{}' has no length, ending immediately",
                        duration
                    );
                }

                self.timers.schedule(invocation.id, delay, responder).await;
            }
            Command::Ticket { message, button } => {
                responder.reply(&ticket_panel(&message, &button)).await?;
            }
            Command::Fake { user, message } => {
                responder.reply(&fake_message(&user, &message)).await?;
            }
            Command::ServerInfo { guild: Some(stats) } => {
                responder.reply(&server_info(&stats)).await?;
            }
            Command::ServerInfo { guild: None } => {
                tracing::warn!(
                    "Ignoring /serverinfo for interaction {}: guild not available",
                    invocation.id
                );
            }
        }

        Ok(())
    }
}
