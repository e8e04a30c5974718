//! Output rendering for the chat front-end.
//!
//! The transcript itself is owned by the chat session; this module only
//! defines the seam through which terminal outcomes reach the user. The
//! default implementation writes to stdout with optional ANSI styling.

use std::io::{self, Stdout, Write};

/// ANSI escape code for cyan text (used for informational messages).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies: styled
/// terminal output, plain text for piping, or a silent sink in tests.
pub trait Renderer: Send {
    /// Print an assistant reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn write_styled(&mut self, style: &str, text: &str) {
        let mut out = self.stdout.lock();
        if self.use_color {
            let _ = write!(out, "{style}{text}{ANSI_RESET}");
        } else {
            let _ = write!(out, "{text}");
        }
        let _ = writeln!(out);
        let _ = out.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, text: &str) {
        let mut out = self.stdout.lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    fn print_error(&mut self, error: &str) {
        self.write_styled(ANSI_RED, error);
    }

    fn print_info(&mut self, info: &str) {
        self.write_styled(ANSI_CYAN, info);
    }
}

/// Renderer that discards all output. Useful in tests and for callers
/// that only inspect the transcript.
#[derive(Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn print_reply(&mut self, _text: &str) {}

    fn print_error(&mut self, _error: &str) {}

    fn print_info(&mut self, _info: &str) {}
}
