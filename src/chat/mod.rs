//! Chat front-end module for conversing with the ClassMate assistant.
//!
//! This module provides a REPL chat interface built on top of the
//! classmate client library. It supports:
//!
//! - A transcript owned by the session for the life of the chat view
//! - Bounded linear retry on dispatch failures, with a fixed delay
//! - Slash commands for session control
//! - A liveness guard so late outcomes never touch a torn-down view
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: transcript ownership, submission, and retry dispatch
//! - [`commands`]: slash command parsing and handling

mod commands;
mod config;
mod session;

pub use crate::render::{NullRenderer, PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::{ChatEndpoint, ChatSession, Liveness, Message, RetryPolicy, SessionStats};
