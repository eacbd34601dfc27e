//! Sparse, integer-addressed tape.
//!
//! Reads of unwritten addresses yield integer 0 without creating an entry.
//! Only explicit writes (source loading or an instruction) make an address
//! *defined*, and the run loop halts as soon as the head points at an
//! undefined address.

use rustc_hash::FxHashMap;

use crate::cell::Cell;

static ZERO: Cell = Cell::ZERO;

/// The tape of one interpreter instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    cells: FxHashMap<i64, Cell>,
}

impl Memory {
    /// Create an empty tape.
    pub fn new() -> Self {
        Memory::default()
    }

    /// Load a program: line `i` of `source` becomes address `i`.
    ///
    /// In debug mode everything from the first `#` on a line is dropped and
    /// the remaining code is trimmed before classification. Otherwise `#` is
    /// ordinary string content and only the line terminator is removed.
    pub fn load(source: &str, debug: bool) -> Self {
        let mut memory = Memory::new();
        for (address, line) in (0_i64..).zip(source.lines()) {
            let line = if debug {
                line.split_once('#').map_or(line, |(code, _comment)| code).trim()
            } else {
                line
            };
            memory.set(address, Cell::classify(line));
        }
        memory
    }

    /// The cell at `address`, or integer 0 if it was never written.
    #[inline]
    pub fn get(&self, address: i64) -> &Cell {
        self.cells.get(&address).unwrap_or(&ZERO)
    }

    /// Integer view of the cell at `address`.
    #[inline]
    pub fn get_int(&self, address: i64) -> i64 {
        self.get(address).intify()
    }

    /// Whether `address` has been explicitly written.
    #[inline]
    pub fn contains(&self, address: i64) -> bool {
        self.cells.contains_key(&address)
    }

    #[inline]
    pub fn set(&mut self, address: i64, cell: Cell) {
        self.cells.insert(address, cell);
    }

    /// Number of defined addresses.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Debug rendering of addresses `0..width`, defaults included.
    pub fn snapshot(&self, width: usize) -> String {
        let cells: Vec<String> = (0_i64..)
            .take(width)
            .map(|address| self.get(address).repr())
            .collect();
        format!("[{}]", cells.join(", "))
    }
}
