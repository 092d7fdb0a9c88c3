use crate::server::model::{
    command::GuildStats,
    payload::{EmbedColor, EmbedField, EmbedPayload, MessagePayload},
};

/// Builds the private guild summary for `/serverinfo`.
pub fn server_info(stats: &GuildStats) -> MessagePayload {
    let embed = EmbedPayload::new("📊", "Server Info", EmbedColor::Blue)
        .field(EmbedField::inline("Members", stats.member_count))
        .field(EmbedField::inline("Roles", stats.role_count))
        .field(EmbedField::inline("Channels", stats.channel_count));

    MessagePayload::embed(embed).ephemeral()
}
