//! Cell arithmetic and movement: `copy`, `increment`, `decrement`, `random`.

use rand::Rng;

use super::ExecResult;
use crate::cell::Cell;
use crate::interpreter::Interpreter;

pub fn copy(vm: &mut Interpreter<'_>) -> ExecResult {
    let source = vm.operand();
    let target = vm.operand();
    let cell = vm.memory.get(source).clone();
    vm.memory.set(target, cell);
    vm.finish()
}

pub fn increment(vm: &mut Interpreter<'_>) -> ExecResult {
    step_cell(vm, 1)
}

pub fn decrement(vm: &mut Interpreter<'_>) -> ExecResult {
    step_cell(vm, -1)
}

/// String content is coerced first, so `"abc" + 1` is `1`.
fn step_cell(vm: &mut Interpreter<'_>, delta: i64) -> ExecResult {
    let address = vm.operand();
    let value = vm.memory.get_int(address).wrapping_add(delta);
    vm.memory.set(address, Cell::Int(value));
    vm.finish()
}

/// `random cell top`: uniform integer in `[0, memory[top]]`. A negative
/// bound leaves `cell` untouched.
pub fn random(vm: &mut Interpreter<'_>) -> ExecResult {
    let address = vm.operand();
    let bound_address = vm.operand();
    let top = vm.memory.get_int(bound_address);
    if top >= 0 {
        let value = vm.host.rng.gen_range(0..=top);
        vm.memory.set(address, Cell::Int(value));
    }
    vm.finish()
}
