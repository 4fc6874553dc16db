//! Line-oriented report output.

/// Which terminal stream a line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination for report lines.
///
/// Implementors only decide where a finished line goes. The provided
/// methods fix the textual layout, so every output spells a report the
/// same way.
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: String);

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Stdout, format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  - {}", text));
    }

    /// A file created or changed by the run.
    fn added_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, format!("error: {}", msg));
    }

    /// Separator ahead of a previewed file.
    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Stdout, format!("── {} ──", label));
    }

    /// Multi-line text written as is, e.g. generated source.
    fn preformatted(&mut self, text: &str) {
        self.write_line(Stream::Stdout, text.trim_end_matches('\n').to_string());
    }

    fn newline(&mut self) {
        self.write_line(Stream::Stdout, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout, with warnings and errors on stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: String) {
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Collects rendered lines from both streams for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn write_line(&mut self, _stream: Stream, line: String) {
        self.lines.push(line);
    }
}
