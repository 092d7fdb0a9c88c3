use crate::server::model::{
    member::{MembershipChange, MembershipKind},
    payload::{EmbedColor, EmbedPayload, MessagePayload},
};

/// Builds the welcome or goodbye embed for a membership change.
pub fn membership_announcement(change: &MembershipChange) -> MessagePayload {
    let embed = match change.kind {
        MembershipKind::Joined => EmbedPayload::new("👋", "Welcome!", EmbedColor::Green)
            .description(format!(
                "{} joined. We now have {} members.",
                change.user_tag, change.member_count
            )),
        MembershipKind::Left => EmbedPayload::new("😢", "Goodbye!", EmbedColor::Red)
            .description(format!(
                "{} left. We now have {} members.",
                change.user_tag, change.member_count
            )),
    };

    MessagePayload::embed(embed)
}
