//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! logs the connection and registers the slash commands globally.

use serenity::all::{Context, Ready};

use crate::server::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration overwrites the global command list each time, so a reconnect or a
/// changed definition needs no separate deploy step. A failed registration is logged
/// and the bot keeps running with whatever commands Discord already had.
///
/// # Arguments
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.tag());

    match commands::register_global_commands(&ctx).await {
        Ok(count) => tracing::info!("Registered {} slash commands", count),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
