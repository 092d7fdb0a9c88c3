//! Slash command invocations and their typed form.

use serenity::all::{Guild, User};
use thiserror::Error;

/// Slash commands registered by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    SendEmbed,
    Giveaway,
    Ticket,
    Fake,
    ServerInfo,
}

impl CommandName {
    /// Every registered command, in registration order.
    pub const ALL: [CommandName; 5] = [
        CommandName::SendEmbed,
        CommandName::Giveaway,
        CommandName::Ticket,
        CommandName::Fake,
        CommandName::ServerInfo,
    ];

    /// Name the command is registered under on Discord.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::SendEmbed => "sendembed",
            CommandName::Giveaway => "giveaway",
            CommandName::Ticket => "ticket",
            CommandName::Fake => "fake",
            CommandName::ServerInfo => "serverinfo",
        }
    }

    /// Looks up a command by its registered name.
    ///
    /// # Returns
    /// - `Some(CommandName)` - Name matches a registered command exactly
    /// - `None` - Unknown name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == name)
    }
}

/// Reference to a Discord user resolved from a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: u64,
    /// Discord username (not the guild nickname).
    pub name: String,
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name.clone(),
        }
    }
}

/// Summary counts of the guild a command was invoked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildStats {
    pub member_count: u64,
    pub role_count: usize,
    pub channel_count: usize,
}

impl From<&Guild> for GuildStats {
    fn from(guild: &Guild) -> Self {
        Self {
            member_count: guild.member_count,
            role_count: guild.roles.len(),
            channel_count: guild.channels.len(),
        }
    }
}

/// Value of a single command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    User(UserRef),
}

/// A slash command interaction as received from Discord.
///
/// Created by the bot layer from a Serenity `CommandInteraction`; consumed once by the
/// dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    /// Interaction ID, also the key for any giveaway timer the command schedules.
    pub id: u64,
    /// Command name as sent by Discord.
    pub name: String,
    /// Named options in the order Discord sent them.
    pub options: Vec<(String, OptionValue)>,
    /// Counts for the invoking guild, when the guild is cached.
    pub guild: Option<GuildStats>,
}

#[cfg(test)]
impl CommandInvocation {
    /// Creates an invocation with no options and no guild.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            options: Vec::new(),
            guild: None,
        }
    }

    /// Adds a string option.
    pub fn with_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .push((name.into(), OptionValue::String(value.into())));
        self
    }

    /// Adds a user option.
    pub fn with_user(mut self, name: impl Into<String>, user: UserRef) -> Self {
        self.options.push((name.into(), OptionValue::User(user)));
        self
    }

    /// Sets the guild counts.
    pub fn with_guild(mut self, guild: GuildStats) -> Self {
        self.guild = Some(guild);
        self
    }
}

impl CommandInvocation {
    fn string(&self, name: &'static str) -> Result<String, CommandParseError> {
        self.options
            .iter()
            .find_map(|(option, value)| match value {
                OptionValue::String(value) if option == name => Some(value.clone()),
                _ => None,
            })
            .ok_or_else(|| self.missing(name))
    }

    fn user(&self, name: &'static str) -> Result<UserRef, CommandParseError> {
        self.options
            .iter()
            .find_map(|(option, value)| match value {
                OptionValue::User(user) if option == name => Some(user.clone()),
                _ => None,
            })
            .ok_or_else(|| self.missing(name))
    }

    fn missing(&self, option: &'static str) -> CommandParseError {
        CommandParseError::MissingOption {
            command: self.name.clone(),
            option,
        }
    }
}

/// Reasons an invocation cannot be turned into a [`Command`].
///
/// Neither is surfaced to the user; the dispatcher logs and drops the invocation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Discord marks every option as required, so this only happens if the
    /// registered command definitions drift from what the dispatcher expects.
    #[error("Command '{command}' is missing required option '{option}'")]
    MissingOption {
        command: String,
        option: &'static str,
    },
}

/// A fully parsed slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SendEmbed { message: String },
    Giveaway { title: String, duration: String },
    Ticket { message: String, button: String },
    Fake { user: UserRef, message: String },
    ServerInfo { guild: Option<GuildStats> },
}

impl Command {
    /// Parses an invocation into a typed command.
    ///
    /// # Arguments
    /// - `invocation` - Raw invocation from the bot layer
    ///
    /// # Returns
    /// - `Ok(Command)` - Known command with all required options present
    /// - `Err(CommandParseError::UnknownCommand)` - Name is not registered
    /// - `Err(CommandParseError::MissingOption)` - A required option is absent
    pub fn parse(invocation: &CommandInvocation) -> Result<Self, CommandParseError> {
        let Some(name) = CommandName::from_name(&invocation.name) else {
            return Err(CommandParseError::UnknownCommand(invocation.name.clone()));
        };

        let command = match name {
            CommandName::SendEmbed => Command::SendEmbed {
                message: invocation.string("message")?,
            },
            CommandName::Giveaway => Command::Giveaway {
                title: invocation.string("title")?,
                duration: invocation.string("duration")?,
            },
            CommandName::Ticket => Command::Ticket {
                message: invocation.string("message")?,
                button: invocation.string("button")?,
            },
            CommandName::Fake => Command::Fake {
                user: invocation.user("user")?,
                message: invocation.string("message")?,
            },
            CommandName::ServerInfo => Command::ServerInfo {
                guild: invocation.guild,
            },
        };

        Ok(command)
    }

    pub fn name(&self) -> CommandName {
        match self {
            Command::SendEmbed { .. } => CommandName::SendEmbed,
            Command::Giveaway { .. } => CommandName::Giveaway,
            Command::Ticket { .. } => CommandName::Ticket,
            Command::Fake { .. } => CommandName::Fake,
            Command::ServerInfo { .. } => CommandName::ServerInfo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> UserRef {
        UserRef {
            id: 42,
            name: "Bob".to_string(),
        }
    }

    /// Tests that every registered name round-trips through the lookup.
    ///
    /// Expected: from_name(as_str()) returns the same command
    #[test]
    fn test_command_name_lookup() {
        for command in CommandName::ALL {
            assert_eq!(CommandName::from_name(command.as_str()), Some(command));
        }
        assert_eq!(CommandName::from_name("SendEmbed"), None);
        assert_eq!(CommandName::from_name("ban"), None);
    }

    /// Tests parsing a command with two string options.
    ///
    /// Expected: Ok(Giveaway) with both values
    #[test]
    fn test_parse_giveaway() {
        let invocation = CommandInvocation::new(1, "giveaway")
            .with_string("title", "Prize")
            .with_string("duration", "1s");

        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::Giveaway {
                title: "Prize".to_string(),
                duration: "1s".to_string(),
            })
        );
    }

    /// Tests that option order does not matter.
    ///
    /// Expected: Ok(Ticket) with message and button matched by name
    #[test]
    fn test_parse_ticket_out_of_order() {
        let invocation = CommandInvocation::new(1, "ticket")
            .with_string("button", "Open")
            .with_string("message", "Need help?");

        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::Ticket {
                message: "Need help?".to_string(),
                button: "Open".to_string(),
            })
        );
    }

    /// Tests parsing a user option.
    ///
    /// Expected: Ok(Fake) with the resolved user
    #[test]
    fn test_parse_fake() {
        let invocation = CommandInvocation::new(1, "fake")
            .with_user("user", bob())
            .with_string("message", "hi");

        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::Fake {
                user: bob(),
                message: "hi".to_string(),
            })
        );
    }

    /// Tests that serverinfo carries the guild counts through.
    ///
    /// Expected: Ok(ServerInfo) with the same stats
    #[test]
    fn test_parse_server_info() {
        let stats = GuildStats {
            member_count: 42,
            role_count: 5,
            channel_count: 10,
        };
        let invocation = CommandInvocation::new(1, "serverinfo").with_guild(stats);

        assert_eq!(
            Command::parse(&invocation),
            Ok(Command::ServerInfo { guild: Some(stats) })
        );
    }

    /// Tests that unknown command names are rejected.
    ///
    /// Expected: Err(UnknownCommand)
    #[test]
    fn test_parse_unknown() {
        let invocation = CommandInvocation::new(1, "ban");

        assert_eq!(
            Command::parse(&invocation),
            Err(CommandParseError::UnknownCommand("ban".to_string()))
        );
    }

    /// Tests that a missing or mistyped option is reported.
    ///
    /// Expected: Err(MissingOption) naming the option
    #[test]
    fn test_parse_missing_option() {
        let missing = CommandInvocation::new(1, "sendembed");
        let mistyped = CommandInvocation::new(1, "fake")
            .with_string("user", "Bob")
            .with_string("message", "hi");

        assert_eq!(
            Command::parse(&missing),
            Err(CommandParseError::MissingOption {
                command: "sendembed".to_string(),
                option: "message",
            })
        );
        assert_eq!(
            Command::parse(&mistyped),
            Err(CommandParseError::MissingOption {
                command: "fake".to_string(),
                option: "user",
            })
        );
    }

    /// Tests building stats from a cached Serenity guild.
    ///
    /// Expected: member_count copied, roles counted
    #[test]
    fn test_guild_stats_from_guild() {
        let mut guild = test_utils::serenity::create_test_guild(1, "Pixel", 42);
        for (id, name) in [(11, "Admin"), (12, "Member")] {
            let role = test_utils::serenity::create_test_role(id, name);
            guild.roles.insert(role.id, role);
        }

        let stats = GuildStats::from(&guild);

        assert_eq!(stats.member_count, 42);
        assert_eq!(stats.role_count, 2);
        assert_eq!(stats.channel_count, 0);
    }

    /// Tests building a user reference from a Serenity user.
    ///
    /// Expected: id and username copied
    #[test]
    fn test_user_ref_from_user() {
        let user = test_utils::serenity::create_test_user(42, "Bob");

        assert_eq!(UserRef::from(&user), bob());
    }
}
