//! Console handlers for a root instance's `output`, `input` and `newline`.
//!
//! - Stdio: process stdout/stdin (default)
//! - Buffer: captured output and scripted input, for tests and embedders
//! - Silent: discards output, input is always exhausted
//!
//! Uses enum dispatch rather than trait objects; the console is touched on
//! every I/O instruction.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Strip one trailing `\n` or `\r\n`.
fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Console bound to the process's standard streams.
pub struct StdioConsole {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl StdioConsole {
    pub fn new() -> Self {
        StdioConsole {
            stdout: io::stdout(),
            stdin: io::stdin(),
        }
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.stdout.write_all(text.as_bytes())
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.stdout.write_all(b"\n")
    }

    /// Flushes pending output first so prompts appear before blocking.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.stdout.flush()?;
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_terminator(line)))
    }

    pub fn trace(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{line}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Console that records output and replays scripted input lines.
#[derive(Debug, Default)]
pub struct BufferConsole {
    output: String,
    trace: String,
    input: VecDeque<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        BufferConsole::default()
    }

    /// Console whose `input` instructions receive `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            input: lines.into_iter().map(Into::into).collect(),
            ..BufferConsole::default()
        }
    }

    pub fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    pub fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    pub fn trace(&mut self, line: &str) {
        self.trace.push_str(line);
        self.trace.push('\n');
    }

    /// Everything written by `output` and `newline`.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Debug trace lines, kept apart from program output.
    pub fn trace_output(&self) -> &str {
        &self.trace
    }

    /// Scripted lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

/// Console implementation using enum dispatch.
pub enum Console {
    Stdio(StdioConsole),
    Buffer(BufferConsole),
    Silent,
}

impl Console {
    pub fn stdio() -> Self {
        Console::Stdio(StdioConsole::new())
    }

    pub fn buffer() -> Self {
        Console::Buffer(BufferConsole::new())
    }

    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Console::Buffer(BufferConsole::with_input(lines))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdio(console) => console.print(text),
            Self::Buffer(console) => {
                console.print(text);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    pub fn newline(&mut self) -> io::Result<()> {
        match self {
            Self::Stdio(console) => console.newline(),
            Self::Buffer(console) => {
                console.newline();
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    /// Next input line without its terminator, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        match self {
            Self::Stdio(console) => console.read_line(),
            Self::Buffer(console) => Ok(console.read_line()),
            Self::Silent => Ok(None),
        }
    }

    pub fn trace(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdio(console) => console.trace(line),
            Self::Buffer(console) => {
                console.trace(line);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdio(console) => console.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Captured program output. Empty for consoles that do not capture.
    pub fn output(&self) -> &str {
        match self {
            Self::Buffer(console) => console.output(),
            Self::Stdio(_) | Self::Silent => "",
        }
    }

    /// Captured debug trace. Empty for consoles that do not capture.
    pub fn trace_output(&self) -> &str {
        match self {
            Self::Buffer(console) => console.trace_output(),
            Self::Stdio(_) | Self::Silent => "",
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::stdio()
    }
}
