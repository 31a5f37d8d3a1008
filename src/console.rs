// Copyright 2025 Cowboy AI, LLC.

//! Console output seam
//!
//! Demo operations never print directly; they write through a [`Console`]
//! so the binaries can target the terminal and tests can record lines.

/// Output stream a line was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Standard output
    Out,
    /// Standard error
    Err,
}

/// A single recorded console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Stream the line went to
    pub stream: Stream,
    /// Text without trailing newline
    pub text: String,
}

/// Sink for demo output
pub trait Console {
    /// Write a line to standard output
    fn line(&mut self, text: &str);

    /// Write a line to standard error
    fn error(&mut self, text: &str);
}

/// Console backed by the process stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn error(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

/// Console that keeps every line in memory, for tests
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    lines: Vec<ConsoleLine>,
}

impl RecordingConsole {
    /// Create an empty recording console
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines in write order
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Text of lines written to stdout
    pub fn stdout(&self) -> Vec<&str> {
        self.texts(Stream::Out)
    }

    /// Text of lines written to stderr
    pub fn stderr(&self) -> Vec<&str> {
        self.texts(Stream::Err)
    }

    /// True if any line, on either stream, contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    fn texts(&self, stream: Stream) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.stream == stream)
            .map(|l| l.text.as_str())
            .collect()
    }

    fn push(&mut self, stream: Stream, text: &str) {
        self.lines.push(ConsoleLine {
            stream,
            text: text.to_string(),
        });
    }
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) {
        self.push(Stream::Out, text);
    }

    fn error(&mut self, text: &str) {
        self.push(Stream::Err, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_console_keeps_order_and_stream() {
        let mut console = RecordingConsole::new();
        console.line("uno");
        console.error("dos");
        console.line("tres");

        assert_eq!(console.lines().len(), 3);
        assert_eq!(console.lines()[1].stream, Stream::Err);
        assert_eq!(console.stdout(), vec!["uno", "tres"]);
        assert_eq!(console.stderr(), vec!["dos"]);
        assert!(console.contains("do"));
        assert!(!console.contains("cuatro"));
    }
}
