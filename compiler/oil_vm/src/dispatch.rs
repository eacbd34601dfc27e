//! Static opcode → handler table.
//!
//! The table is built at compile time from an exhaustive `match`, so adding
//! an `Opcode` variant without a handler fails to build.

use crate::cell::Cell;
use crate::exec::{self, ExecResult};
use crate::interpreter::Interpreter;
use crate::opcode::Opcode;

/// An instruction implementation. The opcode cell has already been read;
/// the handler consumes its operands and positions the head.
pub type Handler = fn(&mut Interpreter<'_>) -> ExecResult;

const fn handler(opcode: Opcode) -> Handler {
    match opcode {
        Opcode::Nop => exec::nop,
        Opcode::Copy => exec::copy,
        Opcode::Reverse => exec::reverse,
        Opcode::Quit => exec::quit,
        Opcode::Output => exec::output,
        Opcode::Input => exec::input,
        Opcode::Jump => exec::jump,
        Opcode::RelativeJump => exec::relative_jump,
        Opcode::Increment => exec::increment,
        Opcode::Decrement => exec::decrement,
        Opcode::EqJump => exec::eq_jump,
        Opcode::Newline => exec::newline,
        Opcode::Explode => exec::explode,
        Opcode::Implode => exec::implode,
        Opcode::Call => exec::call,
        Opcode::Random => exec::random,
        Opcode::OrdExplode => exec::ord_explode,
        Opcode::ChrImplode => exec::chr_implode,
    }
}

pub struct DispatchTable {
    handlers: [Handler; Opcode::COUNT],
}

impl DispatchTable {
    const fn build() -> Self {
        let mut handlers: [Handler; Opcode::COUNT] = [exec::nop; Opcode::COUNT];
        let mut index = 0;
        while index < Opcode::COUNT {
            handlers[index] = handler(Opcode::ALL[index]);
            index += 1;
        }
        DispatchTable { handlers }
    }

    #[inline]
    pub fn get(&self, opcode: Opcode) -> Handler {
        self.handlers[opcode.index()]
    }

    /// Resolve the raw cell under the head. Anything that is not an opcode
    /// runs as `nop`.
    #[inline]
    pub fn resolve(&self, cell: &Cell) -> (Opcode, Handler) {
        let opcode = Opcode::from_cell(cell).unwrap_or(Opcode::Nop);
        (opcode, self.get(opcode))
    }
}

/// The process-wide dispatch table.
pub static DISPATCH: DispatchTable = DispatchTable::build();
