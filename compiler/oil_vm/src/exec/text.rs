//! Splitting cells into characters and joining them back.
//!
//! All four instructions lay characters out along the current direction:
//! the `i`-th character lives at `base + i * direction`.

use super::ExecResult;
use crate::cell::Cell;
use crate::head::Direction;
use crate::interpreter::Interpreter;
use crate::memory::Memory;

/// `explode source target`: character count at `target`, then one cell per
/// character. ASCII digits become integers, everything else a one-character
/// string.
pub fn explode(vm: &mut Interpreter<'_>) -> ExecResult {
    scatter(vm, |ch| match ch.to_digit(10) {
        Some(digit) => Cell::Int(i64::from(digit)),
        None => Cell::from(ch),
    })
}

/// `ord_explode source target`: like `explode`, but every character is
/// stored as its code point.
pub fn ord_explode(vm: &mut Interpreter<'_>) -> ExecResult {
    scatter(vm, |ch| Cell::Int(i64::from(u32::from(ch))))
}

/// `implode start length target`: concatenate the rendered cells.
pub fn implode(vm: &mut Interpreter<'_>) -> ExecResult {
    gather(vm, |cell, text| text.push_str(&cell.to_string()))
}

/// `chr_implode start length target`: concatenate the characters whose
/// code points the cells hold. Invalid code points become U+FFFD.
pub fn chr_implode(vm: &mut Interpreter<'_>) -> ExecResult {
    gather(vm, |cell, text| text.push(char_from_code(cell.intify())))
}

fn scatter(vm: &mut Interpreter<'_>, to_cell: impl Fn(char) -> Cell) -> ExecResult {
    let source = vm.operand();
    let target = vm.operand();
    let text = vm.memory.get(source).to_string();
    let direction = vm.head.direction;

    let count = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    vm.memory.set(target, Cell::Int(count));
    for (index, ch) in (1_i64..).zip(text.chars()) {
        vm.memory.set(direction.offset(target, index), to_cell(ch));
    }
    vm.finish()
}

fn gather(vm: &mut Interpreter<'_>, append: impl Fn(&Cell, &mut String)) -> ExecResult {
    let start = vm.operand();
    let length = vm.operand();
    let target = vm.operand();

    let mut text = String::new();
    for cell in cells_along(&vm.memory, vm.head.direction, start, length) {
        append(cell, &mut text);
    }
    vm.memory.set(target, Cell::classify(text));
    vm.finish()
}

/// `length` cells from `start`, stepping by `direction`. Non-positive
/// lengths yield nothing.
fn cells_along(
    memory: &Memory,
    direction: Direction,
    start: i64,
    length: i64,
) -> impl Iterator<Item = &Cell> {
    (0..length.max(0)).map(move |index| memory.get(direction.offset(start, index)))
}

fn char_from_code(code: i64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
