//! OIL command-line driver.
//!
//! ```text
//! oil <source-file> [debug]   run a program
//! oil                         list the instruction set
//! ```
//!
//! Argument and environment handling live in [`options`]; the actual work
//! is done by [`oil_vm::Vm`].

pub mod commands;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output on stderr.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=oil_vm=debug` or `RUST_LOG=oil_vm=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
