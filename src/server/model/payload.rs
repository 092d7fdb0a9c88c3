//! Outbound message payloads.
//!
//! Response builders produce these platform-neutral structs; `bot::render` converts
//! them into Serenity builders at send time.

/// Footer shown on every embed the bot sends.
pub const FOOTER_TEXT: &str = "Pixel Bot 2025";

/// Named embed colors, using Discord's palette values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedColor {
    Blue,
    Gold,
    Purple,
    Green,
    Red,
}

impl EmbedColor {
    /// RGB value of the color.
    pub fn hex(self) -> u32 {
        match self {
            EmbedColor::Blue => 0x3498db,
            EmbedColor::Gold => 0xf1c40f,
            EmbedColor::Purple => 0x9b59b6,
            EmbedColor::Green => 0x57f287,
            EmbedColor::Red => 0xed4245,
        }
    }
}

/// A single name/value field of an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    /// Creates an inline field.
    pub fn inline(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
            inline: true,
        }
    }
}

/// Rich embed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPayload {
    /// Emoji prepended to the title when rendered.
    pub emoji: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub color: EmbedColor,
    pub footer: String,
    pub fields: Vec<EmbedField>,
}

impl EmbedPayload {
    /// Creates an embed with the standard footer and no description or fields.
    pub fn new(emoji: &'static str, title: impl Into<String>, color: EmbedColor) -> Self {
        Self {
            emoji,
            title: title.into(),
            description: None,
            color,
            footer: FOOTER_TEXT.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }

    /// Title as displayed on Discord, with the emoji prefix.
    pub fn display_title(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
}

/// An interactive button attached to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonControl {
    /// Identifier Discord echoes back when the button is pressed.
    pub custom_id: String,
    pub label: String,
    pub emoji: Option<char>,
    pub kind: ButtonKind,
}

/// A complete message: optional text, optional embed and buttons.
///
/// When used as an edit, `buttons` always replaces the existing components, so an
/// empty list removes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessagePayload {
    pub content: Option<String>,
    pub embed: Option<EmbedPayload>,
    pub buttons: Vec<ButtonControl>,
    /// Only visible to the invoking user. Ignored for channel sends and edits.
    pub ephemeral: bool,
}

impl MessagePayload {
    /// A plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// A message carrying a single embed.
    pub fn embed(embed: EmbedPayload) -> Self {
        Self {
            embed: Some(embed),
            ..Default::default()
        }
    }

    pub fn button(mut self, button: ButtonControl) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that new embeds carry the bot footer.
    ///
    /// Expected: footer "Pixel Bot 2025", no fields
    #[test]
    fn test_embed_defaults() {
        let embed = EmbedPayload::new("📢", "Announcement", EmbedColor::Blue);

        assert_eq!(embed.footer, FOOTER_TEXT);
        assert!(embed.description.is_none());
        assert!(embed.fields.is_empty());
        assert_eq!(embed.display_title(), "📢 Announcement");
    }

    /// Tests the palette values.
    ///
    /// Expected: Discord's named colors
    #[test]
    fn test_color_hex() {
        assert_eq!(EmbedColor::Blue.hex(), 0x3498db);
        assert_eq!(EmbedColor::Gold.hex(), 0xf1c40f);
        assert_eq!(EmbedColor::Red.hex(), 0xed4245);
    }
}
