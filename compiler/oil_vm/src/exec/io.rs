//! `output`, `input` and `newline`.
//!
//! A root instance talks to its console. A child spawned by `call` talks to
//! the parent's tape through the remote cursors instead, and its newlines
//! are dropped.

use super::ExecResult;
use crate::cell::Cell;
use crate::errors::VmError;
use crate::interpreter::Interpreter;

pub fn output(vm: &mut Interpreter<'_>) -> ExecResult {
    let address = vm.operand();
    let cell = vm.memory.get(address).clone();
    match vm.remote.as_mut() {
        Some(remote) => remote.write(cell),
        None => vm.host.console.print(&cell.to_string())?,
    }
    vm.finish()
}

pub fn input(vm: &mut Interpreter<'_>) -> ExecResult {
    let address = vm.operand();
    let cell = match vm.remote.as_mut() {
        Some(remote) => remote.read().normalized(),
        None => {
            let line = vm.host.console.read_line()?.ok_or(VmError::InputExhausted)?;
            Cell::classify(line)
        }
    };
    vm.memory.set(address, cell);
    vm.finish()
}

pub fn newline(vm: &mut Interpreter<'_>) -> ExecResult {
    if vm.remote.is_none() {
        vm.host.console.newline()?;
    }
    vm.finish()
}
