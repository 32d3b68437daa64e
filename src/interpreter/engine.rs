// Execution engine for the tape language

use crate::interpreter::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MARGIN, DEFAULT_WINDOW_SIZE};
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::{InputSource, OutputSink};
use crate::interpreter::window::{TapeWindow, WindowView};
use crate::memory::tape::Tape;
use crate::memory::Address;
use crate::parser::instruction::Instruction;
use crate::parser::preprocess::{preprocess, Program};

/// Interpreter configuration, one field per command-line option.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pause for confirmation after each step (file mode only)
    pub step_by_step: bool,

    /// Print the tape window after each step
    pub show_memory: bool,

    /// Number of cells shown in the tape window
    pub window_size: usize,

    /// Minimum distance between the head and a window edge before scrolling;
    /// sane behavior needs `margin <= window_size / 2`
    pub margin: usize,

    /// Emit a trace line describing each instruction as it executes
    pub verbose: bool,

    /// Emit `.` output as numeric values instead of characters
    pub raw_output: bool,

    /// Whether the program came from a file (affects `.` line endings and
    /// whether step-by-step pauses apply)
    pub from_file: bool,

    /// Number of cells added each time the tape grows
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step_by_step: false,
            show_memory: false,
            window_size: DEFAULT_WINDOW_SIZE,
            margin: DEFAULT_MARGIN,
            verbose: false,
            raw_output: false,
            from_file: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// The interpreter: one growable tape plus the state of the current program.
///
/// The tape and head survive across [`Interpreter::evaluate`] calls, so a
/// sequence of fragments evaluated on one instance behaves as a single
/// session over one continuous tape. The program counter and step counter
/// reset at the start of every call.
pub struct Interpreter {
    /// Configuration shared by every fragment in the session
    config: Config,

    /// The memory tape (persists across fragments)
    tape: Tape,

    /// Logical address of the cell under the head (persists across fragments)
    pointer: Address,

    /// Scrolling view of the tape around the head
    window: TapeWindow,

    /// Current fragment: filtered instructions plus the loop jump table,
    /// rebuilt by every [`Interpreter::load`]
    program: Program,

    /// Index of the next instruction to execute
    program_counter: usize,

    /// Instructions executed so far in the current fragment
    steps: usize,

    /// Where `.` output, trace lines, and step prompts go
    output: OutputSink,

    /// Where `,` and the step-by-step pause read from
    input: InputSource,
}

impl Interpreter {
    /// Create an interpreter wired to the real terminal.
    pub fn new(config: Config) -> Self {
        Self::with_io(config, OutputSink::Stdout, InputSource::Stdin)
    }

    /// Create an interpreter with explicit I/O endpoints (the TUI watch mode
    /// and tests).
    pub fn with_io(config: Config, output: OutputSink, input: InputSource) -> Self {
        let tape = Tape::new(config.chunk_size);
        let window = TapeWindow::new(config.window_size, config.margin, 0);
        Interpreter {
            config,
            tape,
            pointer: 0,
            window,
            program: Program::default(),
            program_counter: 0,
            steps: 0,
            output,
            input,
        }
    }

    /// Evaluate one source fragment to completion.
    ///
    /// Preprocessing failures surface before any instruction runs, leaving
    /// the session's tape and head untouched. Returns the number of steps
    /// executed.
    pub fn evaluate(&mut self, source: &str) -> Result<usize, RuntimeError> {
        self.load(source)?;
        while !self.is_finished() {
            self.step()?;
            if self.config.show_memory {
                let frame = self.window_view().to_string();
                self.output.write(&frame);
            }
            if self.config.step_by_step && self.config.from_file {
                self.output.write("Enter to continue to next step...");
                self.input.read_line()?;
            }
        }
        Ok(self.steps)
    }

    /// Preprocess a fragment and reset the program counter and step counter.
    ///
    /// The tape and head carry over from the previous fragment.
    pub fn load(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.program = preprocess(source)?;
        self.program_counter = 0;
        self.steps = 0;
        Ok(())
    }

    /// Execute the instruction at the program counter.
    ///
    /// Counters advance only when the instruction completes, so a step
    /// interrupted by [`RuntimeError::ReadPendingInput`] is retried once a
    /// line is queued rather than counted twice. A no-op once the fragment
    /// is finished.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        if self.is_finished() {
            return Ok(());
        }
        let instruction = self.program.instructions[self.program_counter];
        self.execute(instruction)?;
        self.steps += 1;
        self.program_counter += 1;
        Ok(())
    }

    /// Whether the current fragment has run to completion.
    pub fn is_finished(&self) -> bool {
        self.program_counter >= self.program.instructions.len()
    }

    fn execute(&mut self, instruction: Instruction) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::MoveLeft => self.move_left(),
            Instruction::MoveRight => self.move_right(),
            Instruction::Increment => self.increment(),
            Instruction::Decrement => self.decrement(),
            Instruction::Write => self.write(),
            Instruction::Read => self.read(),
            Instruction::JumpIfZero => self.jump_if_zero(),
            Instruction::JumpUnlessZero => self.jump_unless_zero(),
        }
    }

    /// Move the head left, scrolling the window and growing the tape as
    /// needed.
    fn move_left(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace(format!(
                "Moving the head left from cell {} to {}.",
                self.pointer,
                self.pointer - 1
            ));
        }
        self.pointer -= 1;
        self.window.on_move_left(self.pointer);
        if !self.tape.contains(self.pointer) {
            self.tape.extend_left();
        }
        Ok(())
    }

    /// Move the head right, scrolling the window and growing the tape as
    /// needed.
    fn move_right(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace(format!(
                "Moving the head right from cell {} to {}.",
                self.pointer,
                self.pointer + 1
            ));
        }
        self.pointer += 1;
        self.window.on_move_right(self.pointer);
        if !self.tape.contains(self.pointer) {
            self.tape.extend_right();
        }
        Ok(())
    }

    fn increment(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace("Incrementing the current cell.".to_string());
        }
        let value = self.current_cell().wrapping_add(1);
        self.set_current_cell(value);
        Ok(())
    }

    fn decrement(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace("Decrementing the current cell.".to_string());
        }
        let value = self.current_cell().wrapping_sub(1);
        self.set_current_cell(value);
        Ok(())
    }

    /// Emit the current cell, as a character or as its numeric value.
    fn write(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace("Writing the current cell to the output.".to_string());
        }
        let value = self.current_cell();
        let token = if self.config.raw_output {
            value.to_string()
        } else {
            (value as char).to_string()
        };
        self.output.write(&token);
        if !self.config.from_file {
            self.output.write("\n");
        }
        Ok(())
    }

    /// Read one line of input and store it in the current cell, mod 256.
    fn read(&mut self) -> Result<(), RuntimeError> {
        if self.config.verbose {
            self.trace("Waiting for input...".to_string());
        }
        let line = self.input.read_line()?;
        let value: i64 = line
            .trim()
            .parse()
            .map_err(|_| RuntimeError::InputFormat { line: line.clone() })?;
        self.set_current_cell(value.rem_euclid(256) as u8);
        Ok(())
    }

    fn jump_if_zero(&mut self) -> Result<(), RuntimeError> {
        if self.current_cell() == 0 {
            let target = self
                .program
                .jumps
                .matching_close(self.program_counter)
                .expect("preprocessing records a close for every '['");
            if self.config.verbose {
                self.trace(format!("Jumping to instruction {}.", target));
            }
            self.program_counter = target;
        } else if self.config.verbose {
            self.trace("Current cell is not 0. Not jumping.".to_string());
        }
        Ok(())
    }

    fn jump_unless_zero(&mut self) -> Result<(), RuntimeError> {
        if self.current_cell() != 0 {
            let target = self
                .program
                .jumps
                .matching_open(self.program_counter)
                .expect("preprocessing records an open for every ']'");
            if self.config.verbose {
                self.trace(format!("Jumping to instruction {}.", target));
            }
            self.program_counter = target;
        } else if self.config.verbose {
            self.trace("Current cell is 0. Not jumping.".to_string());
        }
        Ok(())
    }

    /// Emit one verbose trace line through the output sink.
    fn trace(&mut self, line: String) {
        self.output.write(&line);
        self.output.write("\n");
    }

    /// Value of the cell under the head.
    pub fn current_cell(&self) -> u8 {
        self.tape.get(self.pointer)
    }

    fn set_current_cell(&mut self, value: u8) {
        self.tape.set(self.pointer, value);
    }

    /// Logical address of the head.
    pub fn pointer(&self) -> Address {
        self.pointer
    }

    /// Instructions executed so far in the current fragment.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Index of the next instruction to execute.
    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// The current fragment's instruction stream.
    pub fn instructions(&self) -> &[Instruction] {
        &self.program.instructions
    }

    /// Backing tape length in cells.
    pub fn tape_len(&self) -> usize {
        self.tape.len()
    }

    /// Current frame of the tape window.
    pub fn window_view(&self) -> WindowView {
        self.window.view(&self.tape, self.pointer)
    }

    /// The output endpoint (captured output in TUI and test runs).
    pub fn output(&self) -> &OutputSink {
        &self.output
    }

    /// Queue a line for the next `,` (queued-input mode only).
    pub fn queue_input(&mut self, line: String) {
        self.input.push_line(line);
    }
}
