//! Main TUI application state and logic

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Steps executed per auto-play tick.
const PLAY_STEPS_PER_TICK: usize = 4;

/// Step budget for one fast-forward press; a diverging program stops here
/// instead of hanging the UI.
const FAST_FORWARD_BUDGET: usize = 1_000_000;

/// The main application state
pub struct App {
    /// The interpreter instance (captured output, queued input)
    pub interpreter: Interpreter,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time an auto-play tick ran
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Line being typed for a pending `,` (None = not reading input)
    pub input_buffer: Option<String>,
}

impl App {
    /// Create a new app around a loaded interpreter.
    pub fn new(interpreter: Interpreter) -> Self {
        App {
            interpreter,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            input_buffer: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_millis(200) {
                for _ in 0..PLAY_STEPS_PER_TICK {
                    if !self.try_step() {
                        break;
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(55),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let view = self.interpreter.window_view();
        super::panes::render_tape_pane(frame, chunks[0], &view);

        super::panes::render_program_pane(
            frame,
            chunks[1],
            self.interpreter.instructions(),
            self.interpreter.program_counter(),
            self.interpreter.is_finished(),
        );

        super::panes::render_output_pane(frame, chunks[2], &self.interpreter.output().lines());

        let status = match &self.input_buffer {
            Some(buffer) => format!("Input for ',': {}", buffer),
            None => self.status_message.clone(),
        };
        super::panes::render_status_bar(
            frame,
            chunks[3],
            &status,
            self.interpreter.steps(),
            self.interpreter.pointer(),
            self.input_buffer.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Read-input mode captures everything until Enter or Esc
        if self.input_buffer.is_some() {
            match key.code {
                KeyCode::Char(c) => {
                    if let Some(buffer) = self.input_buffer.as_mut() {
                        buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = self.input_buffer.as_mut() {
                        buffer.pop();
                    }
                }
                KeyCode::Enter => {
                    let line = self.input_buffer.take().unwrap_or_default();
                    self.interpreter.queue_input(line);
                    self.status_message = String::from("Input queued");
                    self.try_step();
                }
                KeyCode::Esc => {
                    self.input_buffer = None;
                    self.is_playing = false;
                    self.status_message = String::from("Input cancelled");
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.try_step() && !self.interpreter.is_finished() {
                    self.status_message = String::from("Stepped");
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    self.status_message = if self.is_playing {
                        String::from("Playing...")
                    } else {
                        String::from("Paused")
                    };
                }
            }
            KeyCode::Char('f') => {
                self.is_playing = false;
                let mut executed = 0;
                while executed < FAST_FORWARD_BUDGET && self.try_step() {
                    executed += 1;
                }
                if !self.interpreter.is_finished() && executed == FAST_FORWARD_BUDGET {
                    self.status_message = format!("Paused after {} steps", executed);
                }
            }
            _ => {}
        }
    }

    /// Execute one instruction; returns false when no step was taken.
    fn try_step(&mut self) -> bool {
        if self.interpreter.is_finished() {
            self.is_playing = false;
            self.status_message =
                format!("Completed in {} steps", self.interpreter.steps());
            return false;
        }

        match self.interpreter.step() {
            Ok(()) => {
                if self.interpreter.is_finished() {
                    self.is_playing = false;
                    self.status_message =
                        format!("Completed in {} steps", self.interpreter.steps());
                }
                true
            }
            Err(RuntimeError::ReadPendingInput) => {
                if self.input_buffer.is_none() {
                    self.input_buffer = Some(String::new());
                }
                false
            }
            Err(e) => {
                self.is_playing = false;
                self.status_message = format!("Error: {}", e);
                false
            }
        }
    }
}
