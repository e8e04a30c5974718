//! Configuration types for the chat front-end.
//!
//! This module provides CLI argument parsing via `arrrg` and the
//! resolved configuration controlling chat behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::chat::session::RetryPolicy;

/// Default retries after a failed dispatch.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay between attempts.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How the assistant introduces itself, and the name used in the
/// fixed dispatch-failure placeholder.
const DEFAULT_ASSISTANT_NAME: &str = "ClassMate AI";

/// Command-line arguments for the classmate-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Backend API base URL.
    #[arrrg(optional, "Backend API base URL (default: $CLASSMATE_API_URL)", "URL")]
    pub api_url: Option<String>,

    /// Retries after a failed dispatch.
    #[arrrg(optional, "Retries after a failed dispatch (default: 3)", "COUNT")]
    pub max_retries: Option<u32>,

    /// Delay between attempts, in milliseconds.
    #[arrrg(optional, "Delay between attempts in ms (default: 1000)", "MS")]
    pub retry_delay_ms: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Backend API base URL; `None` falls back to the client's
    /// environment lookup.
    pub api_url: Option<String>,

    /// Retries after a failed dispatch.
    pub max_retries: u32,

    /// Fixed delay between attempts.
    pub retry_delay: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Assistant display name used in prompts and the failure
    /// placeholder.
    pub assistant_name: String,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Max retries: 3
    /// - Retry delay: 1000 ms
    /// - Color: enabled
    /// - Assistant name: "ClassMate AI"
    pub fn new() -> Self {
        Self {
            api_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            use_color: true,
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
        }
    }

    /// Sets the backend API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets the retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay between attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the assistant display name.
    pub fn with_assistant_name(mut self, name: impl Into<String>) -> Self {
        self.assistant_name = name.into();
        self
    }

    /// The retry policy this configuration resolves to.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay)
    }

    /// The transcript placeholder appended when every retry fails.
    pub fn error_placeholder(&self) -> String {
        format!("Error communicating with {}", self.assistant_name)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            api_url: args.api_url,
            max_retries: args.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: args
                .retry_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_RETRY_DELAY),
            use_color: !args.no_color,
            ..ChatConfig::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert!(config.api_url.is_none());
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_millis(1000));
        assert!(config.use_color);
        assert_eq!(config.assistant_name, "ClassMate AI");
    }

    #[test]
    fn error_placeholder_text() {
        assert_eq!(
            ChatConfig::new().error_placeholder(),
            "Error communicating with ClassMate AI"
        );
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert!(config.api_url.is_none());
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            api_url: Some("https://classmate.example.com/api/".to_string()),
            max_retries: Some(5),
            retry_delay_ms: Some(250),
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://classmate.example.com/api/")
        );
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay, Duration::from_millis(250));
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_api_url("http://localhost:5000/api/")
            .with_max_retries(1)
            .with_retry_delay(Duration::from_millis(10))
            .without_color()
            .with_assistant_name("Tutor");

        assert_eq!(config.api_url.as_deref(), Some("http://localhost:5000/api/"));
        assert_eq!(config.retry_policy().max_attempts(), 2);
        assert!(!config.use_color);
        assert_eq!(config.error_placeholder(), "Error communicating with Tutor");
    }
}
