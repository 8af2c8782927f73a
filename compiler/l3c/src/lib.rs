//! L3 translator driver.
//!
//! Glue between external parsers and the two translators:
//!
//! ```text
//! JSON AST → decode → l3_lower (--emit=l3)     → Scheme text
//!                   → l3_pyemit (--emit=python) → Python-like text
//! ```
//!
//! The library half is IO-free apart from [`compile_file`]; the `l3c` binary
//! is a thin argument parser on top.

mod compile;
mod explain;
pub mod options;

use std::sync::Once;

pub use compile::{compile, compile_file, compile_json, decode, CompileError};
pub use explain::{explain, list_codes};
pub use options::{parse_compile_options, CompileOptions, Emit};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=l3_lower=debug` or
/// `RUST_LOG=trace`; set `L3C_LOG_TREE=1` for an indented span tree instead
/// of flat lines. Output goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("L3C_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
