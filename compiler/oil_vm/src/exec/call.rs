//! `call file write_to read_from`: run another program as a child.

use super::ExecResult;
use crate::interpreter::Interpreter;

/// The file operand is taken raw (never coerced) and resolved against the
/// directory of the running program. The cursor operands are addresses
/// whose contents seed this instance's remote cursors.
///
/// Any failure of the child is logged and otherwise ignored: the caller
/// continues as if the call had succeeded.
pub fn call(vm: &mut Interpreter<'_>) -> ExecResult {
    let file = vm.raw_operand().to_string();
    let write_to = vm.operand();
    let read_from = vm.operand();
    vm.cursors.write_to = vm.memory.get_int(write_to);
    vm.cursors.read_from = vm.memory.get_int(read_from);

    let path = vm.origin.join(&file);
    match vm.run_child(&path) {
        Ok(summary) => {
            tracing::debug!(
                path = %path.display(),
                steps = summary.steps,
                "nested call finished"
            );
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "nested call failed");
            if vm.config.debug {
                let line = format!("call {} failed: {error}", path.display());
                vm.host.console.trace(&line)?;
            }
        }
    }
    vm.finish()
}
