//! OIL interpreter CLI.

use oilc::commands::{print_opcode_table, run_program};
use oilc::options::{Invocation, RunOptions};

fn main() {
    oilc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = Invocation::parse(&args);

    match invocation {
        Invocation::OpcodeTable => print_opcode_table(),
        Invocation::Help => print_usage(),
        Invocation::Version => {
            println!("oil {}", env!("CARGO_PKG_VERSION"));
        }
        Invocation::Run { path, debug } => {
            let options = match RunOptions::from_env(path, debug, |key| std::env::var(key).ok()) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(2);
                }
            };
            if let Err(code) = run_program(&options) {
                std::process::exit(code);
            }
        }
    }
}

fn print_usage() {
    println!("OIL interpreter");
    println!();
    println!("Usage: oil <source-file> [debug]");
    println!();
    println!("  <source-file>    Program to run, one tape cell per line");
    println!("  [debug]          Any second argument enables comment stripping");
    println!("                   and a trace of every step");
    println!();
    println!("Without arguments the instruction set is listed.");
    println!();
    println!("Environment:");
    println!("  OIL_SEED=<n>             Seed for the random instruction");
    println!("  OIL_MAX_CALL_DEPTH=<n>   Nested call limit (0 = unlimited)");
    println!("  RUST_LOG=<filter>        Diagnostic logging to stderr");
}
