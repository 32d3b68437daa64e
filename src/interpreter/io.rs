//! Program I/O endpoints
//!
//! The engine reads and writes through these enums so the same execution
//! loop can run against the real terminal (file and REPL modes) or against
//! captured buffers (the TUI watch mode and the test suite).

use super::errors::RuntimeError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where `.` output, trace lines, and step prompts go.
#[derive(Debug)]
pub enum OutputSink {
    /// Write through to stdout, flushing per token so file-mode output
    /// appears as the program runs rather than at exit.
    Stdout,
    /// Record output for the TUI output pane and for tests.
    Captured(String),
}

impl OutputSink {
    /// Append one token (a character, a numeric value, or a trace line).
    pub fn write(&mut self, token: &str) {
        match self {
            OutputSink::Stdout => {
                let mut stdout = io::stdout();
                let _ = stdout.write_all(token.as_bytes());
                let _ = stdout.flush();
            }
            OutputSink::Captured(buffer) => buffer.push_str(token),
        }
    }

    /// Captured output split into display lines.
    ///
    /// Empty for [`OutputSink::Stdout`]; that variant has already written
    /// everything through.
    pub fn lines(&self) -> Vec<String> {
        match self {
            OutputSink::Stdout => Vec::new(),
            OutputSink::Captured(buffer) => {
                let mut lines: Vec<String> = buffer.split('\n').map(str::to_string).collect();
                if lines.last().is_some_and(|line| line.is_empty()) {
                    lines.pop();
                }
                lines
            }
        }
    }

    /// The entire captured buffer (empty for [`OutputSink::Stdout`]).
    pub fn contents(&self) -> &str {
        match self {
            OutputSink::Stdout => "",
            OutputSink::Captured(buffer) => buffer,
        }
    }
}

/// Where `,` and the step-by-step pause read their lines from.
#[derive(Debug)]
pub enum InputSource {
    /// Block on one line from stdin.
    Stdin,
    /// Pop lines from a queue fed by the TUI or a test.
    Queued(VecDeque<String>),
}

impl InputSource {
    /// Read one line of input, without its line terminator.
    ///
    /// Stdin blocks until a line arrives and reports
    /// [`RuntimeError::SourceExhausted`] at end of stream. The queued source
    /// signals [`RuntimeError::ReadPendingInput`] when empty so the caller
    /// can collect a line and retry the same step.
    pub fn read_line(&mut self) -> Result<String, RuntimeError> {
        match self {
            InputSource::Stdin => {
                let mut line = String::new();
                let read = io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|_| RuntimeError::SourceExhausted)?;
                if read == 0 {
                    return Err(RuntimeError::SourceExhausted);
                }
                Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
            }
            InputSource::Queued(queue) => {
                queue.pop_front().ok_or(RuntimeError::ReadPendingInput)
            }
        }
    }

    /// Queue a line for the next read (queued mode only).
    pub fn push_line(&mut self, line: String) {
        if let InputSource::Queued(queue) = self {
            queue.push_back(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_sink_records_tokens() {
        let mut sink = OutputSink::Captured(String::new());
        sink.write("He");
        sink.write("llo");
        assert_eq!(sink.contents(), "Hello");
    }

    #[test]
    fn test_captured_lines_drop_trailing_terminator() {
        let mut sink = OutputSink::Captured(String::new());
        sink.write("one\ntwo\n");
        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_queued_source_pops_in_order() {
        let mut input = InputSource::Queued(VecDeque::new());
        input.push_line("1".to_string());
        input.push_line("2".to_string());
        assert_eq!(input.read_line().unwrap(), "1");
        assert_eq!(input.read_line().unwrap(), "2");
    }

    #[test]
    fn test_empty_queue_signals_pending_input() {
        let mut input = InputSource::Queued(VecDeque::new());
        assert_eq!(input.read_line(), Err(RuntimeError::ReadPendingInput));
    }
}
