//! OIL virtual machine.
//!
//! A program is a text file with one tape cell per line. The machine reads
//! the opcode under its head, consumes the following operand cells, and
//! moves on in its current direction until it executes `quit` or reaches
//! an address that was never written.
//!
//! # Architecture
//!
//! ```text
//! Vm (console, rng, config)
//!  └─ Interpreter (root)      Memory + Head + Cursors
//!      └─ call ─► Interpreter (child)
//!                 output/input ─► Remote ─► parent Memory at Cursors
//! ```
//!
//! - [`Cell`] values and the strict integer grammar live in [`cell`].
//! - [`Memory`] is a sparse map; reads of unwritten addresses yield 0.
//! - [`DISPATCH`] maps each [`Opcode`] to a handler in [`exec`].
//! - A child borrows its parent's tape and cursors for the duration of the
//!   `call` that created it. Nothing outlives that instruction.

pub mod cell;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod errors;
pub mod exec;
pub mod head;
pub mod interpreter;
pub mod memory;
pub mod opcode;
pub mod remote;
pub mod source;
mod vm;

#[cfg(test)]
mod testing;

pub use cell::{is_strict_integer, parse_strict, Cell};
pub use config::VmConfig;
pub use console::{BufferConsole, Console, StdioConsole};
pub use dispatch::{DispatchTable, Handler, DISPATCH};
pub use errors::{VmError, VmResult};
pub use exec::Flow;
pub use head::{Direction, Head};
pub use interpreter::{Host, Interpreter, RunSummary, Termination};
pub use memory::Memory;
pub use opcode::Opcode;
pub use remote::{Cursors, Remote};
pub use vm::Vm;
