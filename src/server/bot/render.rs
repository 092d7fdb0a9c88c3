//! Rendering of [`MessagePayload`]s into Serenity builders.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse,
};

use crate::server::model::payload::{ButtonControl, ButtonKind, EmbedPayload, MessagePayload};

/// Builds a Serenity embed, with the emoji prefixed to the title.
pub fn embed(payload: &EmbedPayload) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(payload.display_title())
        .color(payload.color.hex())
        .footer(CreateEmbedFooter::new(&payload.footer));

    if let Some(description) = &payload.description {
        embed = embed.description(description);
    }

    for field in &payload.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    embed
}

fn button(control: &ButtonControl) -> CreateButton {
    let style = match control.kind {
        ButtonKind::Primary => ButtonStyle::Primary,
        ButtonKind::Secondary => ButtonStyle::Secondary,
    };

    let mut button = CreateButton::new(&control.custom_id)
        .label(&control.label)
        .style(style);

    if let Some(emoji) = control.emoji {
        button = button.emoji(emoji);
    }

    button
}

/// Puts all buttons in a single action row; no buttons means no rows.
pub fn action_rows(buttons: &[ButtonControl]) -> Vec<CreateActionRow> {
    if buttons.is_empty() {
        return Vec::new();
    }

    vec![CreateActionRow::Buttons(buttons.iter().map(button).collect())]
}

/// Initial interaction response.
pub fn interaction_response(payload: &MessagePayload) -> CreateInteractionResponse {
    let mut message = CreateInteractionResponseMessage::new().ephemeral(payload.ephemeral);

    if let Some(content) = &payload.content {
        message = message.content(content);
    }
    if let Some(payload_embed) = &payload.embed {
        message = message.embed(embed(payload_embed));
    }
    if !payload.buttons.is_empty() {
        message = message.components(action_rows(&payload.buttons));
    }

    CreateInteractionResponse::Message(message)
}

/// Edit of the initial interaction response.
///
/// Components are always set, so an empty button list clears them. Content and embed
/// are only touched when present.
pub fn edit_response(payload: &MessagePayload) -> EditInteractionResponse {
    let mut edit = EditInteractionResponse::new().components(action_rows(&payload.buttons));

    if let Some(content) = &payload.content {
        edit = edit.content(content);
    }
    if let Some(payload_embed) = &payload.embed {
        edit = edit.embed(embed(payload_embed));
    }

    edit
}

/// Regular channel message.
pub fn channel_message(payload: &MessagePayload) -> CreateMessage {
    let mut message = CreateMessage::new();

    if let Some(content) = &payload.content {
        message = message.content(content);
    }
    if let Some(payload_embed) = &payload.embed {
        message = message.embed(embed(payload_embed));
    }
    if !payload.buttons.is_empty() {
        message = message.components(action_rows(&payload.buttons));
    }

    message
}
