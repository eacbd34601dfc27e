//! Redirected I/O between a child instance and the parent that called it.
//!
//! While a child runs, its parent is blocked inside `call`. The child
//! borrows the parent's tape and cursors for exactly that long: every
//! `output` stores into the parent's tape at `write_to`, every `input`
//! loads from `read_from`, and each access moves that cursor one cell in the
//! parent's direction.

use crate::cell::Cell;
use crate::head::Direction;
use crate::memory::Memory;

/// Cursor addresses in an instance's own tape, used by the child it calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursors {
    pub write_to: i64,
    pub read_from: i64,
}

/// A child's view of its parent.
pub struct Remote<'p> {
    memory: &'p mut Memory,
    cursors: &'p mut Cursors,
    direction: Direction,
}

impl<'p> Remote<'p> {
    pub fn new(memory: &'p mut Memory, cursors: &'p mut Cursors, direction: Direction) -> Self {
        Remote {
            memory,
            cursors,
            direction,
        }
    }

    pub fn write(&mut self, cell: Cell) {
        self.memory.set(self.cursors.write_to, cell);
        self.cursors.write_to = self.direction.offset(self.cursors.write_to, 1);
    }

    pub fn read(&mut self) -> Cell {
        let cell = self.memory.get(self.cursors.read_from).clone();
        self.cursors.read_from = self.direction.offset(self.cursors.read_from, 1);
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_advance_in_parent_direction() {
        let mut memory = Memory::new();
        let mut cursors = Cursors {
            write_to: 10,
            read_from: 0,
        };
        let mut remote = Remote::new(&mut memory, &mut cursors, Direction::Backward);
        remote.write(Cell::Int(1));
        remote.write(Cell::from("b"));

        assert_eq!(cursors.write_to, 8);
        assert_eq!(memory.get(10), &Cell::Int(1));
        assert_eq!(memory.get(9), &Cell::from("b"));
    }

    #[test]
    fn reads_take_defaults_past_written_cells() {
        let mut memory = Memory::load("x\n5", false);
        let mut cursors = Cursors::default();
        let mut remote = Remote::new(&mut memory, &mut cursors, Direction::Forward);

        assert_eq!(remote.read(), Cell::from("x"));
        assert_eq!(remote.read(), Cell::Int(5));
        assert_eq!(remote.read(), Cell::Int(0));
        assert_eq!(cursors.read_from, 3);
        assert!(!memory.contains(2));
    }
}
