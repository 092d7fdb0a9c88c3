use serenity::all::{CommandInteraction, Context, Interaction, ResolvedValue};
use std::sync::Arc;

use crate::server::{
    bot::responder::InteractionResponder,
    model::command::{CommandInvocation, GuildStats, OptionValue, UserRef},
    service::dispatch::CommandDispatcher,
};

/// Handles the interaction_create event.
///
/// Slash commands go to the dispatcher. Button presses (`join_giveaway`,
/// `create_ticket`) are acknowledged by nobody and only logged.
pub async fn handle_interaction_create(
    dispatcher: &CommandDispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => handle_command(dispatcher, ctx, command).await,
        Interaction::Component(component) => {
            tracing::debug!(
                "Ignoring press of component '{}' by {}",
                component.data.custom_id,
                component.user.name
            );
        }
        _ => {}
    }
}

async fn handle_command(dispatcher: &CommandDispatcher, ctx: Context, command: CommandInteraction) {
    // Cache reference is released here so nothing holds it across an await
    let guild = command.guild_id.and_then(|guild_id| {
        guild_id
            .to_guild_cached(&ctx.cache)
            .map(|guild| GuildStats::from(&*guild))
    });

    let invocation = build_invocation(&command, guild);
    let responder = Arc::new(InteractionResponder::new(ctx.http.clone(), command));

    if let Err(e) = dispatcher.dispatch(&invocation, responder).await {
        tracing::error!(
            "Failed to handle /{} (interaction {}): {}",
            invocation.name,
            invocation.id,
            e
        );
    }
}

/// Converts a Serenity command interaction into a [`CommandInvocation`].
///
/// String and resolved user options are kept; every other option kind, and user
/// options Discord did not resolve, are dropped.
fn build_invocation(command: &CommandInteraction, guild: Option<GuildStats>) -> CommandInvocation {
    let options = command
        .data
        .options()
        .into_iter()
        .filter_map(|option| {
            let value = match option.value {
                ResolvedValue::String(value) => OptionValue::String(value.to_string()),
                ResolvedValue::User(user, _) => OptionValue::User(UserRef::from(user)),
                _ => return None,
            };
            Some((option.name.to_string(), value))
        })
        .collect();

    CommandInvocation {
        id: command.id.get(),
        name: command.data.name.clone(),
        options,
        guild,
    }
}
