//! Tape of 8-bit cells with a bounds-checked head pointer

use core_types::{BfError, BfResult};

/// Fixed-size tape
///
/// Cell arithmetic wraps modulo 256. The head never leaves
/// `[0, len)`: a move that would is rejected with
/// [`BfError::TapeOutOfRange`] and leaves the head where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    head: usize,
}

impl Tape {
    /// Create a zeroed tape of `heap_size` cells
    pub fn new(heap_size: usize) -> BfResult<Self> {
        if heap_size == 0 {
            return Err(BfError::InvalidHeapSize(heap_size));
        }
        Ok(Self {
            cells: vec![0; heap_size],
            head: 0,
        })
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a tape has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current head position
    pub fn head(&self) -> usize {
        self.head
    }

    /// All cells
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Consume the tape, returning its cells
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// Value under the head
    #[inline]
    pub fn current(&self) -> u8 {
        self.cells[self.head]
    }

    /// Overwrite the cell under the head
    #[inline]
    pub fn set(&mut self, value: u8) {
        self.cells[self.head] = value;
    }

    /// Add `count` to the cell under the head, wrapping
    #[inline]
    pub fn add(&mut self, count: usize) {
        let cell = &mut self.cells[self.head];
        *cell = cell.wrapping_add(count as u8);
    }

    /// Subtract `count` from the cell under the head, wrapping
    #[inline]
    pub fn sub(&mut self, count: usize) {
        let cell = &mut self.cells[self.head];
        *cell = cell.wrapping_sub(count as u8);
    }

    /// Move the head `count` cells to the right
    #[inline]
    pub fn move_right(&mut self, count: usize) -> BfResult<()> {
        match self.head.checked_add(count) {
            Some(next) if next < self.cells.len() => {
                self.head = next;
                Ok(())
            }
            _ => Err(BfError::TapeOutOfRange {
                head: (self.head as isize).saturating_add_unsigned(count),
                heap_size: self.cells.len(),
            }),
        }
    }

    /// Move the head `count` cells to the left
    #[inline]
    pub fn move_left(&mut self, count: usize) -> BfResult<()> {
        match self.head.checked_sub(count) {
            Some(next) => {
                self.head = next;
                Ok(())
            }
            None => Err(BfError::TapeOutOfRange {
                head: (self.head as isize).saturating_sub_unsigned(count),
                heap_size: self.cells.len(),
            }),
        }
    }
}
