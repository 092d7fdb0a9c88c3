//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// The user has the new-style `"0"` discriminator, so `User::tag()` returns the bare
/// username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Discord username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
        "system": false,
        "mfa_enabled": false,
        "flags": 0,
        "premium_type": 0,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
