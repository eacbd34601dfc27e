//! Locating and reading program files.

use std::path::{Path, PathBuf};

use crate::errors::{VmError, VmResult};

/// Read a program file as UTF-8 text.
pub fn read_source(path: &Path) -> VmResult<String> {
    std::fs::read_to_string(path).map_err(|source| VmError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory that `call` targets of the program at `path` are relative to.
pub fn source_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
