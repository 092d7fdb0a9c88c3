use crate::server::model::payload::{
    ButtonControl, ButtonKind, EmbedColor, EmbedPayload, MessagePayload,
};

/// Custom ID of the giveaway entry button. Presses are not handled.
pub const JOIN_GIVEAWAY_ID: &str = "join_giveaway";

/// Builds the giveaway announcement with its single "Join" button.
pub fn giveaway(title: &str) -> MessagePayload {
    let embed = EmbedPayload::new("🎉", "Giveaway", EmbedColor::Gold)
        .description(format!("{title}\nClick the button below to enter!"));

    MessagePayload::embed(embed).button(ButtonControl {
        custom_id: JOIN_GIVEAWAY_ID.to_string(),
        label: "Join".to_string(),
        emoji: Some('🎁'),
        kind: ButtonKind::Primary,
    })
}

/// Edit applied to the giveaway reply once its timer fires.
///
/// Leaves the embed in place, sets the content and removes the button.
pub fn giveaway_ended() -> MessagePayload {
    MessagePayload::text("Giveaway ended!")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the giveaway embed and button.
    ///
    /// Expected: title in the description, one primary join button
    #[test]
    fn test_giveaway() {
        let payload = giveaway("Prize");
        let embed = payload.embed.as_ref().unwrap();

        assert_eq!(embed.title, "Giveaway");
        assert_eq!(
            embed.description.as_deref(),
            Some("Prize\nClick the button below to enter!")
        );
        assert_eq!(embed.color, EmbedColor::Gold);
        assert_eq!(payload.buttons.len(), 1);
        assert_eq!(payload.buttons[0].custom_id, JOIN_GIVEAWAY_ID);
        assert_eq!(payload.buttons[0].label, "Join");
        assert_eq!(payload.buttons[0].kind, ButtonKind::Primary);
        assert!(!payload.ephemeral);
    }

    /// Tests the ended edit.
    ///
    /// Expected: content set, no buttons
    #[test]
    fn test_giveaway_ended() {
        let payload = giveaway_ended();

        assert_eq!(payload.content.as_deref(), Some("Giveaway ended!"));
        assert!(payload.buttons.is_empty());
        assert!(payload.embed.is_none());
    }
}
