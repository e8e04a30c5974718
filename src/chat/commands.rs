//! Slash command parsing for the chat front-end.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the assistant.

/// A parsed chat command.
///
/// These commands control the chat session and are not dispatched to
/// the assistant.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the transcript.
    Clear,

    /// Change the retry count for subsequent submissions.
    Retries(u32),

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Display session statistics.
    Stats,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if
/// it should be submitted as a regular message.
///
/// # Examples
///
/// ```
/// # use classmate::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/retries 5").is_some());
/// assert!(parse_command("What is due this week?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "retries" => match argument.map(|s| s.parse::<u32>()) {
            Some(Ok(count)) => ChatCommand::Retries(count),
            Some(Err(_)) => ChatCommand::Invalid("/retries requires a number".to_string()),
            None => ChatCommand::Invalid("/retries requires a number".to_string()),
        },
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" => ChatCommand::Stats,
        unknown => ChatCommand::Invalid(format!("Unknown command: /{unknown}")),
    };

    Some(result)
}

/// Returns the help text listing available commands.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     /help          Show this help\n\
     /clear         Clear the transcript\n\
     /retries <n>   Set retries after a failed dispatch\n\
     /stats         Show session statistics\n\
     /quit          Exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_commands_pass_through() {
        assert!(parse_command("What is due this week?").is_none());
        assert!(parse_command("").is_none());
        assert!(parse_command("hello /quit").is_none());
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
    }

    #[test]
    fn commands_are_case_insensitive_and_trimmed() {
        assert_eq!(parse_command("  /CLEAR  "), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/Quit"), Some(ChatCommand::Quit));
    }

    #[test]
    fn retries_argument() {
        assert_eq!(parse_command("/retries 5"), Some(ChatCommand::Retries(5)));
        assert!(matches!(
            parse_command("/retries"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/retries many"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/model gemini"),
            Some(ChatCommand::Invalid(_))
        ));
    }
}
