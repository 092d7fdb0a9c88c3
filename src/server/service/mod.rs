//! Service layer for command handling and announcements.
//!
//! This module sits between the Serenity event handler (`bot/`) and Discord itself.
//! Services are responsible for:
//!
//! - **Response building**: Pure functions turning command arguments into payloads
//! - **Dispatch**: Routing an invocation to its builder and performing the side effects
//! - **Timers**: Owning the deferred giveaway edits
//! - **Announcements**: Posting join/leave messages to the guild system channel
//!
//! Services talk to Discord only through the [`responder::Responder`] and
//! [`responder::ChannelSender`] traits, so they can be exercised with recording fakes.

pub mod dispatch;
pub mod giveaway_timer;
pub mod membership;
pub mod responder;
pub mod response;

#[cfg(test)]
mod test;
