//! Interpreter configuration.

/// Default number of leading cells shown by the debug trace.
pub const DEFAULT_TRACE_WIDTH: usize = 30;

/// Default limit on nested `call` depth.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Settings shared by a root instance and every child it spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VmConfig {
    /// Strip `#` comments while loading and trace every step.
    pub debug: bool,
    /// Cells `0..trace_width` are printed before each traced step.
    pub trace_width: usize,
    /// Deepest allowed chain of nested calls, `None` for unlimited.
    /// A call beyond the limit fails like any other child error.
    pub max_call_depth: Option<usize>,
}

impl VmConfig {
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_trace_width(mut self, width: usize) -> Self {
        self.trace_width = width;
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether a child at `depth` (root is 0) may run.
    #[inline]
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_call_depth.is_none_or(|max| depth <= max)
    }
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            debug: false,
            trace_width: DEFAULT_TRACE_WIDTH,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet_and_bounded() {
        let config = VmConfig::default();
        assert!(!config.debug);
        assert_eq!(config.trace_width, 30);
        assert!(config.allows_depth(DEFAULT_MAX_CALL_DEPTH));
        assert!(!config.allows_depth(DEFAULT_MAX_CALL_DEPTH + 1));
    }

    #[test]
    fn unlimited_depth_allows_everything() {
        let config = VmConfig::default().with_max_call_depth(None);
        assert!(config.allows_depth(usize::MAX));
    }
}
