//! Token scanners.
//!
//! Both scanners walk the full token list on their own; neither knows about
//! the other. [`Dispatcher::parse`](crate::Dispatcher::parse) runs them in
//! sequence and merges the results.

mod arguments;
mod commands;

pub use arguments::{HELP_LONG_KEY, HELP_SHORT_KEY};

pub(crate) use arguments::{ArgumentsOutcome, scan_arguments};
pub(crate) use commands::scan_commands;
