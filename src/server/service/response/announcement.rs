use crate::server::model::payload::{EmbedColor, EmbedPayload, MessagePayload};

/// Builds the public announcement embed for `/sendembed`.
pub fn announcement(message: &str) -> MessagePayload {
    MessagePayload::embed(
        EmbedPayload::new("📢", "Announcement", EmbedColor::Blue).description(message),
    )
}

/// Private acknowledgement shown to whoever ran `/sendembed`.
pub fn announcement_ack() -> MessagePayload {
    MessagePayload::text("Embed sent!").ephemeral()
}
