//! Diagnostics for the command line tool.
//!
//! Log output goes to stderr so `generate --stdout` can be piped straight
//! into a file.

mod tracing;

pub use self::tracing::{init_tracing, verbosity_filter};
