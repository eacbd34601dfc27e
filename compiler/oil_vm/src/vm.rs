//! Session entry point: owns the console, RNG and configuration that every
//! instance of one run shares.

use std::path::{Path, PathBuf};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::VmConfig;
use crate::console::Console;
use crate::errors::VmResult;
use crate::interpreter::{Host, Interpreter, RunSummary};
use crate::memory::Memory;
use crate::source::{read_source, source_dir};

pub struct Vm {
    config: VmConfig,
    console: Console,
    rng: SmallRng,
}

impl Vm {
    /// Session on the process's standard streams.
    pub fn new(config: VmConfig) -> Self {
        Vm::with_console(config, Console::stdio())
    }

    pub fn with_console(config: VmConfig, console: Console) -> Self {
        Vm {
            config,
            console,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Make `random` reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn into_console(self) -> Console {
        self.console
    }

    /// Run the program stored at `path`. Its `call` targets resolve
    /// relative to the file's directory.
    pub fn run_file(&mut self, path: &Path) -> VmResult<RunSummary> {
        let source = read_source(path)?;
        self.run_source(&source, source_dir(path))
    }

    /// Run program text. `origin` is the directory `call` targets resolve
    /// against.
    #[tracing::instrument(level = "debug", skip_all, fields(origin = %origin.as_ref().display()))]
    pub fn run_source(&mut self, source: &str, origin: impl AsRef<Path>) -> VmResult<RunSummary> {
        let memory = Memory::load(source, self.config.debug);
        let origin: PathBuf = origin.as_ref().to_path_buf();
        let result = {
            let host = Host::new(&mut self.console, &mut self.rng);
            Interpreter::root(memory, origin, host, self.config).run()
        };
        let flushed = self.console.flush();
        let summary = result?;
        flushed?;
        tracing::debug!(termination = ?summary.termination, steps = summary.steps, "run finished");
        Ok(summary)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Vm::new(VmConfig::default())
    }
}
