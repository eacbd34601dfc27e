//! Head movement: `nop`, `reverse`, `quit` and the three jumps.

use super::{ExecResult, Flow};
use crate::interpreter::Interpreter;

pub fn nop(vm: &mut Interpreter<'_>) -> ExecResult {
    vm.finish()
}

pub fn reverse(vm: &mut Interpreter<'_>) -> ExecResult {
    vm.head.reverse();
    vm.finish()
}

pub fn quit(_vm: &mut Interpreter<'_>) -> ExecResult {
    Ok(Flow::Quit)
}

/// The operand itself is the new pointer.
pub fn jump(vm: &mut Interpreter<'_>) -> ExecResult {
    vm.head.pointer = vm.operand();
    Ok(Flow::Continue)
}

/// Move by `operand` cells in the current direction, counted from the
/// operand cell.
pub fn relative_jump(vm: &mut Interpreter<'_>) -> ExecResult {
    let offset = vm.operand();
    vm.head.pointer = vm.head.direction.offset(vm.head.pointer, offset);
    Ok(Flow::Continue)
}

/// `eq_jump a b t_equal t_different`
///
/// Compares the raw contents of `a` and `b` (an integer never equals a
/// string). When they differ the head skips `t_equal`, so the jump target
/// is read from the following cell instead.
pub fn eq_jump(vm: &mut Interpreter<'_>) -> ExecResult {
    let first = vm.operand();
    let second = vm.operand();
    if vm.memory.get(first) != vm.memory.get(second) {
        vm.head.advance();
    }
    vm.head.pointer = vm.operand();
    Ok(Flow::Continue)
}
