//! Tape-language execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the interpreter state machine and instruction dispatch
//! - [`errors`]: runtime error types
//! - [`io`]: output sink and input source endpoints
//! - [`window`]: the scrolling tape view model
//!
//! # Execution Model
//!
//! A fragment is preprocessed into an instruction stream and a loop jump
//! table, then executed one instruction per step. The tape and head persist
//! across fragments on the same interpreter; the program counter and step
//! counter reset per fragment, which is what makes an interactive session
//! behave as one continuous tape.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod io;
pub mod window;
