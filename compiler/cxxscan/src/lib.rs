//! `cxxscan`: print the variable declarations found in C/C++ sources.
//!
//! Thin command-line layer over [`cxx_scanner`]. Inputs are scanned in
//! parallel and reported as text or JSON.

mod args;
mod error;
mod scan;

use std::sync::Once;

pub use args::{parse_args, Invocation, Mode, ScanArgs, USAGE};
pub use error::CliError;
pub use scan::{read_inputs, run, scan_input, scan_inputs, write_reports, FileReport, Input, STDIN_LABEL};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=cxx_scanner=debug`
/// or `RUST_LOG=cxx_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
