//! Scrolling window over the tape
//!
//! The window is pure presentation state. It trails the head as it moves and
//! decides which cell range is visible, but it never affects program
//! semantics. Scrolling is one cell per head move, matching the single-cell
//! head step, so the view slides along with the head instead of jumping.

use crate::memory::tape::Tape;
use crate::memory::Address;
use std::fmt;

/// Visible range of the tape and its scroll rules.
#[derive(Debug, Clone)]
pub struct TapeWindow {
    start: Address,
    size: usize,
    margin: usize,
}

impl TapeWindow {
    /// Create a window of `size` cells that scrolls when the head comes
    /// within `margin` cells of an edge. The head starts `margin` cells in
    /// from the left edge.
    pub fn new(size: usize, margin: usize, pointer: Address) -> Self {
        TapeWindow {
            start: pointer - margin as Address,
            size,
            margin,
        }
    }

    /// Address of the leftmost visible cell.
    pub fn start(&self) -> Address {
        self.start
    }

    /// React to the head having moved one cell left.
    pub fn on_move_left(&mut self, pointer: Address) {
        if pointer - self.start < self.margin as Address {
            self.start -= 1;
        }
    }

    /// React to the head having moved one cell right.
    pub fn on_move_right(&mut self, pointer: Address) {
        if self.start + self.size as Address - pointer <= self.margin as Address {
            self.start += 1;
        }
    }

    /// Snapshot the visible cells and the head's offset within them.
    pub fn view(&self, tape: &Tape, pointer: Address) -> WindowView {
        let cells = (self.start..self.start + self.size as Address)
            .map(|address| (address, tape.get(address)))
            .collect();
        WindowView {
            cells,
            cursor: (pointer - self.start).max(0) as usize,
        }
    }
}

/// One rendered frame of the window: `(address, value)` pairs plus the
/// head's offset into them for marker placement. This is the full contract
/// between the execution core and any display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub cells: Vec<(Address, u8)>,
    pub cursor: usize,
}

impl WindowView {
    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}+", "+-----".repeat(self.cells.len()))
    }
}

impl fmt::Display for WindowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, (address, _)) in self.cells.iter().enumerate() {
            if i == 0 {
                write!(f, "  {:^3}", address)?;
            } else {
                write!(f, "   {:^3}", address)?;
            }
        }
        writeln!(f)?;
        self.border(f)?;
        for (_, value) in &self.cells {
            write!(f, "| {:^3} ", value)?;
        }
        writeln!(f, "|")?;
        self.border(f)?;
        writeln!(f, "{}   ^", "      ".repeat(self.cursor))
    }
}
