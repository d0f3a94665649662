//! # cli-dispatch
//!
//! Declare commands and typed options, then hand over `argv` once: matching
//! commands run their callbacks and matching options fill the host's
//! variables.
//!
//! ## Quick Start
//!
//! ```rust
//! use cli_dispatch::{Argument, Command, Config, Dispatcher, ParseOutcome, Slot};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.set_config(Config::new("Example CLI").version("1.0.0"));
//!
//! dispatcher
//!     .add_command(
//!         Command::new("hello", |name| println!("Hello: {}", name.unwrap_or("(no value)")))
//!             .with_required_value("Name"),
//!     )
//!     .unwrap();
//!
//! let count = Slot::new(0i64);
//! dispatcher
//!     .add_argument(
//!         Argument::new("--count", count.clone())
//!             .short("-c")
//!             .with_required_value("Number"),
//!     )
//!     .unwrap();
//! dispatcher.generate_help().unwrap();
//!
//! let outcome = dispatcher.parse(&["prog", "hello", "world", "-c", "5"]).unwrap();
//! assert_eq!(outcome, ParseOutcome::Continue);
//! assert_eq!(count.get(), 5);
//! ```
//!
//! ## Token rules
//!
//! - A command matches on exact key equality, anywhere after the program name.
//! - A command that takes a value uses the next token, unless that token starts
//!   with some registered command key.
//! - An option matches its exact long or short key. Flags take no token;
//!   valued options convert the next token into their [`Destination`].
//! - `--key=value` and combined short flags (`-abc`) are not recognized.
//! - `--help` stops option processing and yields [`ParseOutcome::Exit`].

// ============================================================================
// Core Modules
// ============================================================================

/// String to number conversion with explicit errors.
pub mod convert;

/// Command and argument registries and their descriptors.
pub mod registry;

/// Token scanners for commands and arguments.
pub mod scan;

mod dispatcher;
mod error;

// ============================================================================
// Presentation
// ============================================================================

pub mod config;
pub mod help;
pub mod logging;

pub use config::{Config, LogLevel};
pub use convert::{ConvertError, ConvertErrorKind};
pub use dispatcher::{Dispatcher, ExitRequest, ParseOutcome};
pub use error::{ParseError, RegistrationError, ScanError};
pub use registry::{Argument, Callback, Command, Destination, Registry, Slot, ValueType};
