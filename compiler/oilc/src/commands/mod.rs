//! Command handlers for the OIL CLI.

mod codes;
mod run;

pub use codes::{opcode_table, print_opcode_table};
pub use run::{describe_error, run_program};
