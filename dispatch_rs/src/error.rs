//! Error types for registration and parsing.
//!
//! None of these abort the process. A failed parse may already have run some
//! callbacks and written some destinations; nothing is rolled back.

use thiserror::Error;

use crate::convert::ConvertError;

/// A descriptor was refused by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("key must not be empty")]
    EmptyKey,

    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),

    #[error("argument key `{0}` is already registered")]
    DuplicateArgument(String),

    #[error("argument `{0}` takes no value and needs a boolean destination")]
    FlagDestination(String),
}

/// A scanner pass stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("command {key} requires value `{value_name}` but none provided")]
    MissingCommandValue { key: String, value_name: String },

    #[error("argument {key} requires value `{value_name}` but none provided")]
    MissingArgumentValue { key: String, value_name: String },

    #[error("argument {key}: {source}")]
    Conversion {
        key: String,
        #[source]
        source: ConvertError,
    },
}

/// Aggregate failure of [`Dispatcher::parse`](crate::Dispatcher::parse).
///
/// Holds one entry per failed scanner, commands first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error during parsing, invalid input: {}", summary(.failures))]
pub struct ParseError {
    pub failures: Vec<ScanError>,
}

fn summary(failures: &[ScanError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
