use crate::server::model::{command::UserRef, payload::MessagePayload};

/// Formats a message as if `user` had said it.
///
/// This is plain text sent by the bot; nothing is posted under the user's identity.
pub fn fake_message(user: &UserRef, message: &str) -> MessagePayload {
    MessagePayload::text(format!("{}: {}", user.name, message))
}
