//! Domain models for commands and outbound messages.
//!
//! Inbound interactions are converted into a [`command::CommandInvocation`] at the bot
//! boundary and parsed into a typed [`command::Command`]. Response builders produce a
//! [`payload::MessagePayload`] which the bot layer renders into Serenity builders. None
//! of these types outlive a single interaction.

pub mod command;
pub mod member;
pub mod payload;
