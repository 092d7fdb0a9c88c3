use serenity::all::{Context, GuildId, Member, User};

use crate::server::{
    bot::responder::HttpChannelSender,
    model::member::{MembershipChange, MembershipKind},
    service::membership::MembershipService,
};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(ctx: Context, new_member: Member) {
    announce(ctx, new_member.guild_id, &new_member.user, MembershipKind::Joined).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    announce(ctx, guild_id, &user, MembershipKind::Left).await;
}

async fn announce(ctx: Context, guild_id: GuildId, user: &User, kind: MembershipKind) {
    // The cache has already applied the event, so member_count is the new total
    let Some(change) = guild_id
        .to_guild_cached(&ctx.cache)
        .map(|guild| MembershipChange::new(kind, user, &guild))
    else {
        tracing::debug!(
            "Guild {} not cached, skipping {:?} announcement for {}",
            guild_id,
            kind,
            user.name
        );
        return;
    };

    let sender = HttpChannelSender::new(ctx.http.clone());

    if let Err(e) = MembershipService::new(&sender).announce(&change).await {
        tracing::error!(
            "Failed to announce {:?} of {} in guild {}: {}",
            kind,
            change.user_tag,
            guild_id,
            e
        );
    }
}
