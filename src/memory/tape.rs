//! Growable byte tape with offset-corrected addressing
//!
//! The tape starts as a single zeroed chunk and grows by whole chunks at
//! either end. Logical addresses are translated through an offset that
//! [`Tape::extend_left`] advances by one chunk, so addresses issued before
//! a left extension keep resolving to the same cells afterwards.

use super::Address;
use std::collections::VecDeque;

/// The memory tape: backing cells plus the logical-to-physical offset.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: VecDeque<u8>,
    offset: usize,
    chunk_size: usize,
}

impl Tape {
    /// Create a tape of one zeroed chunk, with logical address 0 at the
    /// first physical cell.
    pub fn new(chunk_size: usize) -> Self {
        Tape {
            cells: VecDeque::from(vec![0; chunk_size]),
            offset: 0,
            chunk_size,
        }
    }

    fn physical(&self, address: Address) -> Option<usize> {
        let index = address + self.offset as Address;
        if index >= 0 && (index as usize) < self.cells.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Read the cell at a logical address, or 0 when the address lies
    /// outside backing storage.
    ///
    /// Only display paths rely on the 0 fallback; execution never reads out
    /// of bounds because every head move grows the tape first.
    pub fn get(&self, address: Address) -> u8 {
        self.physical(address).map(|i| self.cells[i]).unwrap_or(0)
    }

    /// Write the cell at a logical address.
    ///
    /// The address must map into backing storage; the growth invariant
    /// guarantees this for the head.
    pub fn set(&mut self, address: Address, value: u8) {
        let index = self
            .physical(address)
            .expect("tape growth precedes every write");
        self.cells[index] = value;
    }

    /// Whether a logical address currently maps into backing storage.
    pub fn contains(&self, address: Address) -> bool {
        self.physical(address).is_some()
    }

    /// Add one zeroed chunk on the left, shifting the offset so existing
    /// logical addresses stay valid.
    pub fn extend_left(&mut self) {
        for _ in 0..self.chunk_size {
            self.cells.push_front(0);
        }
        self.offset += self.chunk_size;
    }

    /// Add one zeroed chunk on the right.
    pub fn extend_right(&mut self) {
        for _ in 0..self.chunk_size {
            self.cells.push_back(0);
        }
    }

    /// Backing storage length in cells (always a whole number of chunks).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A tape always holds at least one chunk.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_is_one_zeroed_chunk() {
        let tape = Tape::new(32);
        assert_eq!(tape.len(), 32);
        assert!((0..32).all(|address| tape.get(address) == 0));
    }

    #[test]
    fn test_out_of_bounds_reads_yield_zero() {
        let tape = Tape::new(32);
        assert_eq!(tape.get(-1), 0);
        assert_eq!(tape.get(32), 0);
        assert_eq!(tape.get(1000), 0);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut tape = Tape::new(32);
        tape.set(5, 200);
        assert_eq!(tape.get(5), 200);
    }

    #[test]
    fn test_extend_left_preserves_logical_addresses() {
        let mut tape = Tape::new(32);
        tape.set(3, 7);
        assert!(!tape.contains(-1));

        tape.extend_left();
        assert_eq!(tape.len(), 64);
        assert_eq!(tape.get(3), 7);
        assert!(tape.contains(-1));
        assert!(tape.contains(-32));
        assert!(!tape.contains(-33));
    }

    #[test]
    fn test_extend_right_leaves_addressing_alone() {
        let mut tape = Tape::new(32);
        tape.set(0, 9);
        assert!(!tape.contains(32));

        tape.extend_right();
        assert_eq!(tape.len(), 64);
        assert_eq!(tape.get(0), 9);
        assert!(tape.contains(63));
    }

    #[test]
    fn test_length_is_always_a_chunk_multiple() {
        let mut tape = Tape::new(32);
        tape.extend_left();
        tape.extend_right();
        tape.extend_left();
        assert_eq!(tape.len() % 32, 0);
        assert_eq!(tape.len(), 128);
    }
}
