//! One running program: its tape, its head, and the fetch-execute loop.
//!
//! A root instance is created by [`Vm`](crate::Vm) and owns the session's
//! console. A child instance is created by `call`, borrows the console and
//! RNG from its parent, redirects its I/O through a [`Remote`], and is
//! dropped when `call` returns.

use std::path::{Path, PathBuf};

use rand::rngs::SmallRng;

use crate::cell::Cell;
use crate::config::VmConfig;
use crate::console::Console;
use crate::dispatch::DISPATCH;
use crate::errors::{VmError, VmResult};
use crate::exec::{ExecResult, Flow};
use crate::head::Head;
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::remote::{Cursors, Remote};
use crate::source::{read_source, source_dir};

/// Services borrowed from the session for the lifetime of a run.
pub struct Host<'h> {
    pub console: &'h mut Console,
    pub rng: &'h mut SmallRng,
}

impl<'h> Host<'h> {
    pub fn new(console: &'h mut Console, rng: &'h mut SmallRng) -> Self {
        Host { console, rng }
    }

    /// Shorter-lived copy of the same borrows, handed to a child.
    pub fn reborrow(&mut self) -> Host<'_> {
        Host {
            console: &mut *self.console,
            rng: &mut *self.rng,
        }
    }
}

/// Why a run loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A `quit` instruction executed.
    Quit,
    /// The head reached an address that was never written.
    Halted { pointer: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub termination: Termination,
    /// Instructions executed, not counting the terminating check.
    pub steps: u64,
}

pub struct Interpreter<'h> {
    pub(crate) memory: Memory,
    pub(crate) head: Head,
    pub(crate) cursors: Cursors,
    pub(crate) remote: Option<Remote<'h>>,
    pub(crate) host: Host<'h>,
    pub(crate) config: VmConfig,
    /// Directory `call` targets are resolved against.
    pub(crate) origin: PathBuf,
    depth: usize,
}

impl<'h> Interpreter<'h> {
    /// Top-level instance writing to the host console.
    pub fn root(memory: Memory, origin: PathBuf, host: Host<'h>, config: VmConfig) -> Self {
        Interpreter {
            memory,
            head: Head::new(),
            cursors: Cursors::default(),
            remote: None,
            host,
            config,
            origin,
            depth: 0,
        }
    }

    fn child(
        memory: Memory,
        origin: PathBuf,
        host: Host<'h>,
        remote: Remote<'h>,
        config: VmConfig,
        depth: usize,
    ) -> Self {
        Interpreter {
            memory,
            head: Head::new(),
            cursors: Cursors::default(),
            remote: Some(remote),
            host,
            config,
            origin,
            depth,
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn head(&self) -> Head {
        self.head
    }

    /// Cursors last granted to a child by `call`.
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Nesting level: 0 for the root instance.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_redirected(&self) -> bool {
        self.remote.is_some()
    }

    /// Execute one instruction, or report why the loop should stop.
    pub fn step(&mut self) -> VmResult<Option<Termination>> {
        let pointer = self.head.pointer;
        if !self.memory.contains(pointer) {
            return Ok(Some(Termination::Halted { pointer }));
        }

        let (opcode, handler) = DISPATCH.resolve(self.memory.get(pointer));
        tracing::trace!(depth = self.depth, pointer, %opcode, "step");
        if self.config.debug {
            self.trace_step(opcode)?;
        }

        match handler(self)? {
            Flow::Continue => Ok(None),
            Flow::Quit => Ok(Some(Termination::Quit)),
        }
    }

    /// Step until `quit` or an undefined address.
    pub fn run(&mut self) -> VmResult<RunSummary> {
        let mut steps = 0_u64;
        loop {
            if let Some(termination) = self.step()? {
                return Ok(RunSummary { termination, steps });
            }
            steps = steps.saturating_add(1);
        }
    }

    fn trace_step(&mut self, opcode: Opcode) -> VmResult<()> {
        let snapshot = self.memory.snapshot(self.config.trace_width);
        let console = &mut *self.host.console;
        console.trace(&snapshot)?;
        console.trace(&format!("pointer: {}", self.head.pointer))?;
        console.trace(&format!("{opcode} ({} operands)", opcode.arity()))?;
        Ok(())
    }

    /// Load the program at `path` and run it as a child of this instance.
    ///
    /// The child's remote borrows this instance's tape and cursors until it
    /// finishes.
    pub(crate) fn run_child(&mut self, path: &Path) -> VmResult<RunSummary> {
        let depth = self.depth.saturating_add(1);
        if !self.config.allows_depth(depth) {
            return Err(VmError::CallDepthExceeded {
                limit: self.config.max_call_depth.unwrap_or(depth),
            });
        }

        let source = read_source(path)?;
        let memory = Memory::load(&source, self.config.debug);
        tracing::debug!(path = %path.display(), depth, cells = memory.len(), "nested call");

        let remote = Remote::new(&mut self.memory, &mut self.cursors, self.head.direction);
        let mut child = Interpreter::child(
            memory,
            source_dir(path),
            self.host.reborrow(),
            remote,
            self.config,
            depth,
        );
        oil_stack::ensure_sufficient_stack(|| child.run())
    }

    /// Advance onto the next cell and read it as an integer.
    #[inline]
    pub(crate) fn operand(&mut self) -> i64 {
        self.head.advance();
        self.memory.get_int(self.head.pointer)
    }

    /// Advance onto the next cell and take it without coercion.
    #[inline]
    pub(crate) fn raw_operand(&mut self) -> Cell {
        self.head.advance();
        self.memory.get(self.head.pointer).clone()
    }

    /// Leave the head on the cell after the last operand.
    #[inline]
    pub(crate) fn finish(&mut self) -> ExecResult {
        self.head.advance();
        Ok(Flow::Continue)
    }
}
