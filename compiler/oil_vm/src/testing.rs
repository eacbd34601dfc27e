//! Helpers for running small tapes in unit tests.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::cell::Cell;
use crate::config::VmConfig;
use crate::console::Console;
use crate::errors::VmResult;
use crate::head::Head;
use crate::interpreter::{Host, Interpreter, RunSummary};
use crate::memory::Memory;
use crate::remote::Cursors;

/// Tape with the given cells at the given addresses; every other address
/// is undefined.
pub fn sparse(cells: &[(i64, &str)]) -> Memory {
    let mut memory = Memory::new();
    for &(address, text) in cells {
        memory.set(address, Cell::classify(text));
    }
    memory
}

/// Tape laid out from address 0, one cell per entry.
pub fn tape(cells: &[&str]) -> Memory {
    Memory::load(&cells.join("\n"), false)
}

/// State left behind by a finished root instance.
pub struct Outcome {
    pub summary: VmResult<RunSummary>,
    pub memory: Memory,
    pub head: Head,
    pub cursors: Cursors,
    pub console: Console,
}

impl Outcome {
    pub fn output(&self) -> &str {
        self.console.output()
    }

    pub fn summary(&self) -> RunSummary {
        *self.summary.as_ref().unwrap()
    }
}

pub fn run_with(memory: Memory, console: Console, origin: &Path, config: VmConfig) -> Outcome {
    let mut console = console;
    let mut rng = SmallRng::seed_from_u64(0x0111);
    let (summary, memory, head, cursors) = {
        let host = Host::new(&mut console, &mut rng);
        let mut vm = Interpreter::root(memory, origin.to_path_buf(), host, config);
        let summary = vm.run();
        (summary, vm.memory().clone(), vm.head(), vm.cursors())
    };
    Outcome {
        summary,
        memory,
        head,
        cursors,
        console,
    }
}

/// Run with a capturing console and default settings.
pub fn run(memory: Memory) -> Outcome {
    run_with(memory, Console::buffer(), Path::new(""), VmConfig::default())
}
