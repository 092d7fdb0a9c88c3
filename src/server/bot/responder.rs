//! Serenity implementations of the service seams.

use serenity::all::{ChannelId, CommandInteraction};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    bot::render,
    error::AppError,
    model::payload::MessagePayload,
    service::responder::{ChannelSender, Responder},
};

/// Reply handle for one slash command interaction.
///
/// Owns the interaction and a clone of the shared HTTP client, so giveaway timers can
/// keep it alive after the event handler returns. Discord accepts edits through the
/// interaction token for 15 minutes; later edits fail and are logged by the timer.
pub struct InteractionResponder {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl InteractionResponder {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl Responder for InteractionResponder {
    async fn reply(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.interaction
            .create_response(&self.http, render::interaction_response(message))
            .await?;
        Ok(())
    }

    async fn edit_reply(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.interaction
            .edit_response(&self.http, render::edit_response(message))
            .await?;
        Ok(())
    }

    async fn send(&self, message: &MessagePayload) -> Result<(), AppError> {
        self.interaction
            .channel_id
            .send_message(&self.http, render::channel_message(message))
            .await?;
        Ok(())
    }
}

/// Sends messages to channels by ID through the shared HTTP client.
pub struct HttpChannelSender {
    http: Arc<Http>,
}

impl HttpChannelSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelSender for HttpChannelSender {
    async fn send_to(&self, channel_id: u64, message: &MessagePayload) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, render::channel_message(message))
            .await?;
        Ok(())
    }
}
