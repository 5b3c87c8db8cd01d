//! Chat prompt composition.

/// Label that opens the user-supplied part of a prompt.
pub const USER_LABEL: &str = "User: ";

/// Prefix `user_message` with the system context.
///
/// The user text is inserted verbatim after a `User: ` line; nothing is
/// escaped or truncated.
pub fn compose_prompt(system_context: &str, user_message: &str) -> String {
    let mut prompt =
        String::with_capacity(system_context.len() + 1 + USER_LABEL.len() + user_message.len());
    prompt.push_str(system_context);
    prompt.push('\n');
    prompt.push_str(USER_LABEL);
    prompt.push_str(user_message);
    prompt
}
