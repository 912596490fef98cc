//! JSON fixtures for Serenity User objects.

/// JSON representation of a user as Discord's API returns it.
///
/// All fields besides the ones given are set to defaults (no avatar, no global name,
/// new-style username with a zero discriminator).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `bot` - Whether the user is a bot account
///
/// # Returns
/// - `serde_json::Value` - User object ready to embed in a message payload
pub(crate) fn user_json(user_id: u64, name: &str, bot: bool) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "public_flags": 0,
    })
}
