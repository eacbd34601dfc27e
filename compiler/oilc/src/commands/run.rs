//! The run command: load a program file and execute it on stdio.

use std::io::ErrorKind;

use oil_vm::{Vm, VmError};

use crate::options::RunOptions;

/// Run the program described by `options`.
///
/// On failure the error has already been reported on stderr and the
/// process exit code is returned.
pub fn run_program(options: &RunOptions) -> Result<(), i32> {
    let mut vm = Vm::new(options.config);
    if let Some(seed) = options.seed {
        vm = vm.with_seed(seed);
    }

    match vm.run_file(&options.path) {
        Ok(summary) => {
            tracing::debug!(termination = ?summary.termination, steps = summary.steps, "done");
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", describe_error(&error));
            Err(1)
        }
    }
}

/// User-facing message for a failed run.
pub fn describe_error(error: &VmError) -> String {
    match error {
        VmError::ReadSource { path, source } => {
            let path = path.display();
            match source.kind() {
                ErrorKind::NotFound => format!("cannot find file '{path}'"),
                ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {source}"),
            }
        }
        VmError::InputExhausted => "error: input ended while the program was reading".to_owned(),
        other => format!("error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_file_message_names_path() {
        let error = VmError::ReadSource {
            path: PathBuf::from("missing.oil"),
            source: io::Error::from(ErrorKind::NotFound),
        };
        assert_eq!(describe_error(&error), "cannot find file 'missing.oil'");
    }

    #[test]
    fn missing_program_exits_with_one() {
        let options = crate::options::RunOptions {
            path: PathBuf::from("/nonexistent/dir/prog.oil"),
            config: oil_vm::VmConfig::default(),
            seed: Some(1),
        };
        assert_eq!(run_program(&options), Err(1));
    }

    #[test]
    fn other_errors_are_prefixed() {
        let error = VmError::CallDepthExceeded { limit: 3 };
        assert_eq!(
            describe_error(&error),
            "error: nested call depth exceeds the limit of 3"
        );
    }
}
