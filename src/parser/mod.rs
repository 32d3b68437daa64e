//! Tape-language source parser
//!
//! This module turns raw source text into an executable program:
//! - [`instruction`]: the typed eight-symbol instruction alphabet
//! - [`preprocess`]: comment filtering and loop-bracket matching
//!
//! There is no grammar beyond the loop brackets: every character outside the
//! alphabet is a comment, and the only structural error a program can have
//! is an unbalanced bracket.

pub mod instruction;
pub mod preprocess;
