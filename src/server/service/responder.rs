//! Outbound seams between the services and Discord.

use serenity::async_trait;

use crate::server::{error::AppError, model::payload::MessagePayload};

/// Reply handle for a single command interaction.
///
/// One instance is bound to one interaction. Giveaway timers hold on to it after the
/// command handler returns, so implementations must be `Send + Sync` and own
/// everything they need.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends the initial response to the interaction.
    async fn reply(&self, message: &MessagePayload) -> Result<(), AppError>;

    /// Edits the initial response. `message.buttons` replaces all components.
    async fn edit_reply(&self, message: &MessagePayload) -> Result<(), AppError>;

    /// Posts a new message in the channel the interaction came from.
    async fn send(&self, message: &MessagePayload) -> Result<(), AppError>;
}

/// Sends messages to arbitrary channels, used for membership announcements.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    async fn send_to(&self, channel_id: u64, message: &MessagePayload) -> Result<(), AppError>;
}
