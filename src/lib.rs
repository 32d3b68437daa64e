//! # Introduction
//!
//! braintty executes programs in a minimalist eight-instruction
//! tape-manipulation language, optionally rendering a scrolling window into
//! the memory tape as execution proceeds — as plain text after each step, or
//! live in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Preprocessor → (Instructions, JumpTable) → Engine → Tape + Window
//! ```
//!
//! 1. [`parser`] — filters comments out of the source and matches loop
//!    brackets into a bidirectional jump table.
//! 2. [`interpreter`] — dispatches instructions one step at a time, counts
//!    steps, and keeps the tape window trailing the head; the tape and head
//!    survive across fragments, so a REPL session behaves as one continuous
//!    program.
//! 3. [`memory`] — the growable byte tape with offset-corrected logical
//!    addressing.
//! 4. [`ui`] — ratatui-based watch mode; not part of the stable library API.
//!
//! ## The language
//!
//! Eight single-character instructions: `<` `>` `+` `-` `.` `,` `[` `]`.
//! Every other byte is a comment. Cells are 8-bit with wrapping arithmetic,
//! and the tape grows in whole chunks at either end on demand.

pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod ui;
