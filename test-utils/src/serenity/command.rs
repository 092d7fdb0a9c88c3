//! Test factory for creating Serenity CommandInteraction objects.

use serde_json::Value;
use serenity::all::{CommandInteraction, User};

/// Creates a test slash command interaction.
///
/// The interaction arrives outside any guild with a throwaway token. `options` is
/// the raw Discord option array (`name`, `type`, `value`); users referenced by user
/// options must also be passed in `resolved_users` for serenity to resolve them.
///
/// # Arguments
/// - `interaction_id` - Interaction ID (snowflake)
/// - `name` - Invoked command name
/// - `options` - JSON array of raw command options
/// - `resolved_users` - Users to place in `data.resolved.users`
///
/// # Returns
/// - `CommandInteraction` - A valid Serenity CommandInteraction for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandInteraction (indicates invalid
///   test data)
pub fn create_test_command_interaction(
    interaction_id: u64,
    name: &str,
    options: Value,
    resolved_users: &[User],
) -> CommandInteraction {
    let users: serde_json::Map<String, Value> = resolved_users
        .iter()
        .map(|user| {
            let json = serde_json::to_value(user).expect("Failed to serialize test user");
            (user.id.to_string(), json)
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": interaction_id.to_string(),
        "application_id": "1000",
        "type": 2,
        "data": {
            "id": "2000",
            "name": name,
            "type": 1,
            "options": options,
            "resolved": { "users": users },
        },
        "channel_id": "3000",
        "token": "test-token",
        "version": 1,
        "locale": "en-US",
        "entitlements": [],
        "attachment_size_limit": 8388608,
    }))
    .expect("Failed to create test command interaction - invalid JSON structure")
}
