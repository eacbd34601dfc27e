//! Instruction handlers.
//!
//! Every handler starts with the head on its opcode cell. Operands are read
//! by advancing the head and coercing the new cell to an integer. All
//! handlers except the jumps finish with one more advance so the head lands
//! on the next opcode.

mod call;
mod control;
mod data;
mod io;
mod text;

pub use call::call;
pub use control::{eq_jump, jump, nop, quit, relative_jump, reverse};
pub use data::{copy, decrement, increment, random};
pub use io::{input, newline, output};
pub use text::{chr_implode, explode, implode, ord_explode};

use crate::errors::VmError;

/// What the run loop does after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub type ExecResult = Result<Flow, VmError>;
