//! Handles all report output.
//!
//! The runner writes lines to an [`OutputSink`]. Sinks decide where the lines go
//! and whether outcome lines are coloured; colour never changes the text.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and StdoutSink implementations
// ============================================================================

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How a reported line should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Pass,
    Fail,
    Warn,
}

/// Destination for report lines. A line may itself contain `\n`.
pub trait OutputSink {
    fn emit(&mut self, text: &str);

    fn emit_toned(&mut self, text: &str, _tone: Tone) {
        self.emit(text);
    }
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// StdoutSink: writes report lines to stdout, colouring outcomes when enabled.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        let _ = writeln!(self.stream, "{}", text);
    }

    fn emit_toned(&mut self, text: &str, tone: Tone) {
        let spec = color_for(tone);
        // Only the first line (the outcome keyword) is coloured, the reason stays plain.
        let (head, rest) = match text.split_once('\n') {
            Some((head, rest)) => (head, Some(rest)),
            None => (text, None),
        };
        let _ = self.stream.set_color(&spec);
        let _ = write!(self.stream, "{}", head);
        let _ = self.stream.reset();
        let _ = writeln!(self.stream);
        if let Some(rest) = rest {
            let _ = writeln!(self.stream, "{}", rest);
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn color_for(tone: Tone) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match tone {
        Tone::Banner => spec.set_fg(Some(Color::Cyan)).set_bold(true),
        Tone::Pass => spec.set_fg(Some(Color::Green)),
        Tone::Fail => spec.set_fg(Some(Color::Red)).set_bold(true),
        Tone::Warn => spec.set_fg(Some(Color::Yellow)),
    };
    spec
}
