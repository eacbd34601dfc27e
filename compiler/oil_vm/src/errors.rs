//! Failures that stop an interpreter instance.
//!
//! `quit` and running off the defined tape are normal terminations, not
//! errors. Inside a child these errors never reach the caller's caller:
//! `call` logs and drops them.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VmError {
    #[error("cannot read program '{}': {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// `input` executed after the console ran out of lines.
    #[error("input exhausted")]
    InputExhausted,

    #[error("nested call depth exceeds the limit of {limit}")]
    CallDepthExceeded { limit: usize },
}

pub type VmResult<T> = Result<T, VmError>;
