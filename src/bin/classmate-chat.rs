//! Interactive chat with the ClassMate assistant.
//!
//! This binary provides a REPL interface over the ClassMate backend's
//! chat endpoint. Failed dispatches are retried with a fixed delay
//! before degrading to a visible error message.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage against $CLASSMATE_API_URL (or a local backend)
//! classmate-chat
//!
//! # Point at a specific backend
//! classmate-chat --api-url https://classmate.example.com/api/
//!
//! # Disable colors (useful for piping output)
//! classmate-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear the transcript
//! - `/retries <n>` - Change the retry count
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use classmate::Classmate;
use classmate::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, help_text,
    parse_command,
};

/// Main entry point for the classmate-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("classmate-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let assistant_name = config.assistant_name.clone();

    let client = Classmate::new(config.api_url.clone())?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupt handling while a dispatch is in flight. The
    // handler also revokes liveness so a late outcome is discarded
    // rather than appended to a view we are about to leave.
    let interrupted = Arc::new(AtomicBool::new(false));

    let interrupted_clone = interrupted.clone();
    let live = session.liveness();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
        live.revoke();
    })?;

    println!("{assistant_name} chat");
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Transcript cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Retries(count) => {
                            session.set_max_retries(count);
                            renderer.print_info(&format!("Retries set to {count}"));
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - dispatch to the assistant
                println!("{assistant_name}:");
                session.submit(line, &mut renderer).await;

                if interrupted.load(Ordering::Relaxed) {
                    println!("\nInterrupted, goodbye!");
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    session.close();
    Ok(())
}

fn print_stats(session: &ChatSession) {
    let stats = session.stats();
    println!("    Session Statistics:");
    println!("      Messages: {}", stats.message_count);
    println!("      Submissions: {}", stats.submit_count);
    println!("      Network attempts: {}", stats.dispatch_attempts);
    println!("      Exhausted dispatches: {}", stats.exhausted_dispatches);
    println!(
        "      Retry policy: {} retries, {} ms apart",
        stats.max_retries,
        stats.retry_delay.as_millis()
    );
}
