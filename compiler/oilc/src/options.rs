//! Command-line and environment configuration.

use std::path::PathBuf;

use oil_vm::VmConfig;

/// Seed for the `random` instruction.
pub const SEED_VAR: &str = "OIL_SEED";

/// Nested call limit; `0` removes the limit.
pub const MAX_CALL_DEPTH_VAR: &str = "OIL_MAX_CALL_DEPTH";

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: list opcodes.
    OpcodeTable,
    Help,
    Version,
    /// `oil <path> [anything]`: the mere presence of a second argument
    /// turns on debug mode.
    Run { path: PathBuf, debug: bool },
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Self {
        match args {
            [] => Invocation::OpcodeTable,
            [flag] if flag == "--help" || flag == "-h" => Invocation::Help,
            [flag] if flag == "--version" || flag == "-V" => Invocation::Version,
            [path, rest @ ..] => Invocation::Run {
                path: PathBuf::from(path),
                debug: !rest.is_empty(),
            },
        }
    }
}

/// Everything needed to run one program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub path: PathBuf,
    pub config: VmConfig,
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Combine parsed arguments with environment overrides read through
    /// `var`.
    pub fn from_env(
        path: PathBuf,
        debug: bool,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let mut config = VmConfig::default().with_debug(debug);

        if let Some(raw) = var(MAX_CALL_DEPTH_VAR) {
            let depth: usize = parse_var(MAX_CALL_DEPTH_VAR, &raw)?;
            config = config.with_max_call_depth((depth != 0).then_some(depth));
        }

        let seed = var(SEED_VAR)
            .map(|raw| parse_var(SEED_VAR, &raw))
            .transpose()?;

        Ok(RunOptions { path, config, seed })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("{name} must be a non-negative integer, got '{raw}'"))
}
