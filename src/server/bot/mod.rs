//! Discord bot integration.
//!
//! This module connects the services to Discord through Serenity. The bot registers
//! its slash commands when it becomes ready, turns command interactions into
//! [`CommandInvocation`](crate::server::model::command::CommandInvocation)s for the
//! dispatcher, and announces members joining or leaving in the guild system channel.
//!
//! The bot runs in its own tokio task alongside the liveness endpoint. Its HTTP client
//! is shared with every reply handle, including those held by pending giveaway timers.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populate the guild cache used for counts and system channels
//! - `GUILD_MEMBERS` - Receive member join and leave events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod render;
pub mod responder;
pub mod start;
