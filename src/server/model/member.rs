//! Guild membership changes announced in the system channel.

use serenity::all::{Guild, User};

/// Direction of a membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipKind {
    Joined,
    Left,
}

/// A member joining or leaving a guild.
///
/// Built from the Serenity event plus the cached guild, after the cache has applied
/// the event, so `member_count` is already the new total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    pub kind: MembershipKind,
    /// `User::tag()` of the member, e.g. `name` or `name#1234`.
    pub user_tag: String,
    /// Total members after the change.
    pub member_count: u64,
    /// The guild's system channel, if one is configured.
    pub system_channel_id: Option<u64>,
}

impl MembershipChange {
    /// Builds a change from the event's user and the cached guild.
    pub fn new(kind: MembershipKind, user: &User, guild: &Guild) -> Self {
        Self {
            kind,
            user_tag: user.tag(),
            member_count: guild.member_count,
            system_channel_id: guild.system_channel_id.map(|id| id.get()),
        }
    }
}
