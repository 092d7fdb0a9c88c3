//! Slash command definitions registered with Discord.

use serenity::all::{Command, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::server::{error::AppError, model::command::CommandName};

fn required(
    kind: CommandOptionType,
    name: &str,
    description: &str,
) -> CreateCommandOption {
    CreateCommandOption::new(kind, name, description).required(true)
}

/// Builds the registration payload for one command.
pub fn definition(name: CommandName) -> CreateCommand {
    let command = CreateCommand::new(name.as_str());

    match name {
        CommandName::SendEmbed => command.description("Send an embed message").add_option(
            required(CommandOptionType::String, "message", "Message to send"),
        ),
        CommandName::Giveaway => command
            .description("Create a giveaway")
            .add_option(required(
                CommandOptionType::String,
                "title",
                "Title of giveaway",
            ))
            .add_option(required(
                CommandOptionType::String,
                "duration",
                "Duration (e.g., 1m, 1h)",
            )),
        CommandName::Ticket => command
            .description("Create a support ticket panel")
            .add_option(required(
                CommandOptionType::String,
                "message",
                "Ticket panel message",
            ))
            .add_option(required(
                CommandOptionType::String,
                "button",
                "Button label",
            )),
        CommandName::Fake => command
            .description("Send a fake message as someone else")
            .add_option(required(CommandOptionType::User, "user", "User to mimic"))
            .add_option(required(
                CommandOptionType::String,
                "message",
                "Fake message",
            )),
        CommandName::ServerInfo => command.description("Get server information"),
    }
}

/// Definitions for every command, in registration order.
pub fn definitions() -> Vec<CreateCommand> {
    CommandName::ALL.into_iter().map(definition).collect()
}

/// Replaces the bot's global commands with [`definitions`].
///
/// # Returns
/// - `Ok(usize)` - Number of commands Discord now has registered
/// - `Err(AppError::DiscordErr)` - Registration request failed
pub async fn register_global_commands(ctx: &Context) -> Result<usize, AppError> {
    let registered = Command::set_global_commands(&ctx.http, definitions()).await?;

    Ok(registered.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the registered names and option layout.
    ///
    /// Expected: five commands, every option required, fake takes a user
    #[test]
    fn test_definitions() {
        let rendered: Vec<serde_json::Value> = definitions()
            .iter()
            .map(|command| serde_json::to_value(command).unwrap())
            .collect();

        let names: Vec<&str> = rendered
            .iter()
            .map(|command| command["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["sendembed", "giveaway", "ticket", "fake", "serverinfo"]
        );

        for command in &rendered {
            if let Some(options) = command["options"].as_array() {
                assert!(options.iter().all(|option| option["required"] == true));
            }
        }

        let fake = &rendered[3];
        assert_eq!(fake["options"][0]["name"], "user");
        assert_eq!(fake["options"][0]["type"], 6);
        assert_eq!(fake["options"][1]["type"], 3);
    }
}
