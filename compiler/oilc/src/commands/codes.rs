//! Listing of the instruction set.

use oil_vm::Opcode;

/// One `code: name` line per opcode, in code order.
pub fn opcode_table() -> String {
    Opcode::ALL
        .iter()
        .map(|opcode| format!("{}: {}\n", opcode.code(), opcode.name()))
        .collect()
}

pub fn print_opcode_table() {
    print!("{}", opcode_table());
}
