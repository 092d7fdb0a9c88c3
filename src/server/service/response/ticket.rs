use crate::server::model::payload::{
    ButtonControl, ButtonKind, EmbedColor, EmbedPayload, MessagePayload,
};

/// Custom ID of the ticket panel button. Presses are not handled.
pub const CREATE_TICKET_ID: &str = "create_ticket";

/// Builds a support ticket panel with a caller-labelled button.
pub fn ticket_panel(message: &str, button_label: &str) -> MessagePayload {
    let embed =
        EmbedPayload::new("🎫", "Support Ticket", EmbedColor::Purple).description(message);

    MessagePayload::embed(embed).button(ButtonControl {
        custom_id: CREATE_TICKET_ID.to_string(),
        label: button_label.to_string(),
        emoji: None,
        kind: ButtonKind::Secondary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the panel embed and its button label.
    ///
    /// Expected: message as description, one secondary button with the given label
    #[test]
    fn test_ticket_panel() {
        let payload = ticket_panel("Need help?", "Open ticket");
        let embed = payload.embed.as_ref().unwrap();

        assert_eq!(embed.title, "Support Ticket");
        assert_eq!(embed.description.as_deref(), Some("Need help?"));
        assert_eq!(embed.color, EmbedColor::Purple);
        assert_eq!(
            payload.buttons,
            vec![ButtonControl {
                custom_id: CREATE_TICKET_ID.to_string(),
                label: "Open ticket".to_string(),
                emoji: None,
                kind: ButtonKind::Secondary,
            }]
        );
    }
}
