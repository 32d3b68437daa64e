//! Source preprocessing: comment filtering and loop matching
//!
//! Converts raw source text into a flat [`Instruction`] stream and records
//! the loop structure in a [`JumpTable`]. Everything outside the
//! eight-symbol alphabet is discarded before matching, so bracket positions
//! are always indices into the filtered stream.

use crate::interpreter::errors::RuntimeError;
use crate::parser::instruction::Instruction;
use rustc_hash::FxHashMap;

/// Bidirectional mapping between matching loop brackets.
///
/// Both directions are recorded when a pair is matched, so a backward jump
/// on `]` is a single lookup rather than a scan over the forward table.
#[derive(Debug, Clone, Default)]
pub struct JumpTable {
    open_to_close: FxHashMap<usize, usize>,
    close_to_open: FxHashMap<usize, usize>,
}

impl JumpTable {
    fn record(&mut self, open: usize, close: usize) {
        self.open_to_close.insert(open, close);
        self.close_to_open.insert(close, open);
    }

    /// Position of the `]` matching the `[` at `open`.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        self.open_to_close.get(&open).copied()
    }

    /// Position of the `[` matching the `]` at `close`.
    pub fn matching_open(&self, close: usize) -> Option<usize> {
        self.close_to_open.get(&close).copied()
    }

    /// Number of loop pairs in the program.
    pub fn pairs(&self) -> usize {
        self.open_to_close.len()
    }
}

/// A preprocessed program: the filtered instruction stream plus its loop
/// table. This is everything the engine needs to execute a fragment.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub jumps: JumpTable,
}

/// Filter `source` down to the instruction alphabet and match its loop
/// brackets.
///
/// Fails with [`RuntimeError::MalformedProgram`] on a `]` without an opener
/// or a `[` left unmatched at end of stream. Either failure is raised before
/// anything executes, so session state is never touched by a rejected
/// fragment.
pub fn preprocess(source: &str) -> Result<Program, RuntimeError> {
    let instructions: Vec<Instruction> =
        source.chars().filter_map(Instruction::from_char).collect();

    let mut jumps = JumpTable::default();
    let mut opens: Vec<usize> = Vec::new();

    for (position, instruction) in instructions.iter().enumerate() {
        match instruction {
            Instruction::JumpIfZero => opens.push(position),
            Instruction::JumpUnlessZero => match opens.pop() {
                Some(open) => jumps.record(open, position),
                None => {
                    return Err(RuntimeError::MalformedProgram {
                        message: "']' has no matching '['".to_string(),
                        position,
                    });
                }
            },
            _ => {}
        }
    }

    // Report the outermost unmatched '[' when several are left open
    if let Some(&position) = opens.first() {
        return Err(RuntimeError::MalformedProgram {
            message: "'[' has no matching ']'".to_string(),
            position,
        });
    }

    Ok(Program {
        instructions,
        jumps,
    })
}
