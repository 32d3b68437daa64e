//! Runtime error types for the tape interpreter
//!
//! This module defines [`RuntimeError`], covering everything that can go
//! wrong between receiving a source fragment and completing its execution.
//! The engine never substitutes a default for bad input; every anomaly
//! surfaces here, and the caller decides whether the session continues.

use std::fmt;

/// Errors raised by preprocessing and execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Unbalanced loop brackets; raised before any instruction executes, so
    /// the session's tape and head are left untouched
    MalformedProgram { message: String, position: usize },

    /// A line given to `,` did not parse as an integer
    InputFormat { line: String },

    /// The input stream ended while the program was blocked on `,` or on a
    /// step-by-step pause
    SourceExhausted,

    /// Execution is paused waiting for a queued input line (internal signal,
    /// not a real error)
    ReadPendingInput,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::MalformedProgram { message, position } => {
                write!(
                    f,
                    "malformed program: {} (instruction {})",
                    message, position
                )
            }
            RuntimeError::InputFormat { line } => {
                write!(f, "cannot parse input line {:?} as an integer", line)
            }
            RuntimeError::SourceExhausted => {
                write!(f, "input stream ended while waiting for input")
            }
            RuntimeError::ReadPendingInput => {
                write!(f, "waiting for an input line")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
