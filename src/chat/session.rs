//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the ordered
//! transcript of one chat view and mediates between user input and the
//! remote assistant endpoint, retrying failed dispatches before giving
//! up with a visible placeholder message.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::Classmate;
use crate::chat::config::ChatConfig;
use crate::error::Result;
use crate::observability::{
    CHAT_DISPATCH_DURATION, CHAT_EMPTY_SUBMITS, CHAT_EXHAUSTED, CHAT_REPLIES, CHAT_RETRIES,
    CHAT_STALE_APPENDS, CHAT_SUBMITS,
};
use crate::render::Renderer;

/// Remote endpoint expected by the chat session.
///
/// Any error counts as a dispatch failure; the retry protocol does not
/// distinguish causes.
#[async_trait::async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Deliver one message and await the assistant's reply.
    async fn send_message(&self, text: &str) -> Result<String>;
}

/// A single transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// The message text.
    pub text: String,

    /// True for user messages, false for assistant messages.
    pub is_user: bool,
}

impl Message {
    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Creates an assistant message.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Bounded linear retry: a fixed maximum retry count and a constant
/// delay between attempts. No exponential backoff, no jitter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; total attempts are
    /// `max_retries + 1`.
    pub max_retries: u32,

    /// Fixed delay between consecutive attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given bounds.
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Total number of attempts the policy allows.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// The wait before retrying after `failed_attempt` (zero-based), or
    /// `None` when the policy is exhausted and the dispatch must fail.
    pub fn delay_before_retry(&self, failed_attempt: u32) -> Option<Duration> {
        if failed_attempt < self.max_retries {
            Some(self.delay)
        } else {
            None
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1000))
    }
}

/// Cloneable handle marking whether the chat view backing a session is
/// still alive. Dispatch outcomes that resolve after revocation are
/// discarded instead of being applied to a transcript nobody displays.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Returns true until the owning view is torn down.
    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the owning view as torn down.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

enum DispatchOutcome {
    Reply(String),
    Exhausted,
}

/// A chat session that owns one transcript and dispatches user messages
/// to the assistant endpoint.
///
/// Submissions are serialized: `submit` borrows the session mutably, so
/// a second submission cannot begin before the first reaches its
/// terminal outcome.
pub struct ChatSession<E: ChatEndpoint = Classmate> {
    endpoint: E,
    config: ChatConfig,
    policy: RetryPolicy,
    messages: Vec<Message>,
    busy: bool,
    live: Liveness,
    submit_count: u64,
    dispatch_attempts: u64,
    exhausted_dispatches: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The number of messages in the transcript.
    pub message_count: usize,
    /// Non-empty submissions this session.
    pub submit_count: u64,
    /// Network attempts across all submissions.
    pub dispatch_attempts: u64,
    /// Submissions that exhausted every retry.
    pub exhausted_dispatches: u64,
    /// Retries allowed after a failed attempt.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
}

impl ChatSession<Classmate> {
    /// Creates a new chat session backed by the ClassMate HTTP client.
    pub fn new(endpoint: Classmate, config: ChatConfig) -> Self {
        Self::with_endpoint(endpoint, config)
    }
}

impl<E: ChatEndpoint> ChatSession<E> {
    /// Creates a new chat session with a custom endpoint.
    pub fn with_endpoint(endpoint: E, config: ChatConfig) -> Self {
        let policy = config.retry_policy();
        Self {
            endpoint,
            config,
            policy,
            messages: Vec::new(),
            busy: false,
            live: Liveness::new(),
            submit_count: 0,
            dispatch_attempts: 0,
            exhausted_dispatches: 0,
        }
    }

    /// Submits a user message and incorporates the terminal outcome.
    ///
    /// This method:
    /// 1. Trims the input; empty input is a no-op with no network call
    /// 2. Appends the user message to the transcript synchronously
    /// 3. Dispatches to the endpoint under the retry policy
    /// 4. Appends exactly one reply or one error placeholder
    ///
    /// Dispatch failures never escape: after the last retry fails they
    /// degrade to the placeholder message. The busy flag drops exactly
    /// once, when the dispatch reaches its terminal outcome.
    pub async fn submit(&mut self, input: &str, renderer: &mut dyn Renderer) {
        let text = input.trim();
        if text.is_empty() {
            CHAT_EMPTY_SUBMITS.click();
            return;
        }

        CHAT_SUBMITS.click();
        self.submit_count += 1;
        self.messages.push(Message::user(text));
        self.busy = true;

        let start = Instant::now();
        let outcome = self.dispatch(text).await;
        CHAT_DISPATCH_DURATION.add(start.elapsed().as_secs_f64());

        match outcome {
            DispatchOutcome::Reply(reply) => {
                if self.live.is_live() {
                    renderer.print_reply(&reply);
                    self.messages.push(Message::assistant(reply));
                } else {
                    CHAT_STALE_APPENDS.click();
                }
            }
            DispatchOutcome::Exhausted => {
                self.exhausted_dispatches += 1;
                CHAT_EXHAUSTED.click();
                let placeholder = self.config.error_placeholder();
                if self.live.is_live() {
                    renderer.print_error(&placeholder);
                    self.messages.push(Message::assistant(placeholder));
                } else {
                    CHAT_STALE_APPENDS.click();
                }
            }
        }

        self.busy = false;
    }

    /// Runs the bounded retry loop for one outbound message.
    ///
    /// Attempts are strictly sequential; attempt n+1 starts only after
    /// attempt n's failure is observed and the fixed delay elapses.
    async fn dispatch(&mut self, text: &str) -> DispatchOutcome {
        let mut attempt = 0;
        loop {
            self.dispatch_attempts += 1;
            match self.endpoint.send_message(text).await {
                Ok(reply) => {
                    CHAT_REPLIES.click();
                    return DispatchOutcome::Reply(reply);
                }
                Err(_) => match self.policy.delay_before_retry(attempt) {
                    Some(delay) => {
                        CHAT_RETRIES.click();
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    None => return DispatchOutcome::Exhausted,
                },
            }
        }
    }

    /// Returns the endpoint backing this session.
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Returns the transcript in append order.
    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    /// Returns true while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Clears the transcript.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns a handle to this session's liveness flag.
    pub fn liveness(&self) -> Liveness {
        self.live.clone()
    }

    /// Tears the session down: revokes liveness and empties the
    /// transcript. In-flight dispatch outcomes will be discarded.
    pub fn close(&mut self) {
        self.live.revoke();
        self.messages.clear();
    }

    /// Changes the retry count for subsequent submissions.
    pub fn set_max_retries(&mut self, max_retries: u32) {
        self.policy.max_retries = max_retries;
    }

    /// Returns the active retry policy.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.message_count(),
            submit_count: self.submit_count,
            dispatch_attempts: self.dispatch_attempts,
            exhausted_dispatches: self.exhausted_dispatches,
            max_retries: self.policy.max_retries,
            retry_delay: self.policy.delay,
        }
    }
}

impl<E: ChatEndpoint> Drop for ChatSession<E> {
    fn drop(&mut self) {
        self.live.revoke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;

    struct EchoEndpoint;

    #[async_trait::async_trait]
    impl ChatEndpoint for EchoEndpoint {
        async fn send_message(&self, text: &str) -> Result<String> {
            Ok(format!("echo: {text}"))
        }
    }

    fn session() -> ChatSession<EchoEndpoint> {
        ChatSession::with_endpoint(EchoEndpoint, ChatConfig::default())
    }

    #[test]
    fn retry_policy_bounds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.delay, Duration::from_millis(1000));
        assert_eq!(policy.max_attempts(), 4);
        assert_eq!(
            policy.delay_before_retry(0),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            policy.delay_before_retry(2),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(policy.delay_before_retry(3), None);
    }

    #[test]
    fn retry_policy_zero_retries() {
        let policy = RetryPolicy::new(0, Duration::from_millis(1000));
        assert_eq!(policy.max_attempts(), 1);
        assert_eq!(policy.delay_before_retry(0), None);
    }

    #[test]
    fn new_session_empty_and_idle() {
        let session = session();
        assert_eq!(session.message_count(), 0);
        assert!(!session.is_busy());
        assert!(session.liveness().is_live());
    }

    #[tokio::test]
    async fn whitespace_only_submit_is_a_no_op() {
        let mut session = session();
        let mut renderer = NullRenderer;
        session.submit("   \n\t ", &mut renderer).await;
        assert_eq!(session.message_count(), 0);
        assert_eq!(session.stats().submit_count, 0);
        assert_eq!(session.stats().dispatch_attempts, 0);
    }

    #[tokio::test]
    async fn submit_trims_and_appends_pair() {
        let mut session = session();
        let mut renderer = NullRenderer;
        session.submit("  hello  ", &mut renderer).await;
        assert_eq!(
            session.transcript(),
            &[Message::user("hello"), Message::assistant("echo: hello")]
        );
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn clear_empties_transcript() {
        let mut session = session();
        let mut renderer = NullRenderer;
        session.submit("hello", &mut renderer).await;
        assert_eq!(session.message_count(), 2);
        session.clear();
        assert_eq!(session.message_count(), 0);
    }

    #[tokio::test]
    async fn close_revokes_liveness() {
        let mut session = session();
        let live = session.liveness();
        session.close();
        assert!(!live.is_live());
        assert_eq!(session.message_count(), 0);
    }
}
