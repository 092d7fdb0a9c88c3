//! Join and leave announcements.

use crate::server::{
    error::AppError,
    model::member::{MembershipChange, MembershipKind},
    service::{responder::ChannelSender, response::membership::membership_announcement},
};

/// Posts membership changes to the guild's system channel.
pub struct MembershipService<'a> {
    sender: &'a dyn ChannelSender,
}

impl<'a> MembershipService<'a> {
    pub fn new(sender: &'a dyn ChannelSender) -> Self {
        Self { sender }
    }

    /// Announces a member joining or leaving.
    ///
    /// Guilds without a system channel are skipped silently; this is not an error.
    ///
    /// # Arguments
    /// - `change` - The membership change, with the post-change member count
    ///
    /// # Returns
    /// - `Ok(())` - Announcement sent, or skipped for lack of a system channel
    /// - `Err(AppError::DiscordErr)` - Discord rejected the message
    pub async fn announce(&self, change: &MembershipChange) -> Result<(), AppError> {
        let Some(channel_id) = change.system_channel_id else {
            tracing::debug!(
                "No system channel configured, skipping {:?} announcement for {}",
                change.kind,
                change.user_tag
            );
            return Ok(());
        };

        let payload = membership_announcement(change);
        self.sender.send_to(channel_id, &payload).await?;

        match change.kind {
            MembershipKind::Joined => tracing::info!("Welcomed {}", change.user_tag),
            MembershipKind::Left => tracing::info!("Said goodbye to {}", change.user_tag),
        }

        Ok(())
    }
}
