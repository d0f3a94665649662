//! Argument scanning: find option keys in argv and fill their destinations.

use crate::convert;
use crate::error::ScanError;
use crate::registry::{Argument, Destination, Registry};

/// Long key that stops the scan and asks for the help page.
pub const HELP_LONG_KEY: &str = "--help";
pub const HELP_SHORT_KEY: &str = "-h";

/// How an argument pass ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgumentsOutcome {
    Completed,
    HelpRequested,
}

/// Walk `tokens` and write every matching argument into its destination.
///
/// Unlike the command scan this starts at index 0. Flags never consume a
/// token. Valued arguments read the next token but the scan still visits it,
/// so a value that happens to be a registered key is handled as a key too.
pub(crate) fn scan_arguments<S: AsRef<str>>(
    registry: &Registry,
    tokens: &[S],
) -> Result<ArgumentsOutcome, ScanError> {
    if registry.arguments().is_empty() {
        return Ok(ArgumentsOutcome::Completed);
    }

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let Some(argument) = registry.find_argument(token) else {
            continue;
        };

        if argument.long_key() == HELP_LONG_KEY {
            tracing::debug!(token, "help requested, stopping argument scan");
            if let Destination::Bool(slot) = argument.destination() {
                slot.set(true);
            }
            return Ok(ArgumentsOutcome::HelpRequested);
        }

        if let Destination::Bool(slot) = argument.destination() {
            tracing::info!(argument = argument.long_key(), "found flag");
            slot.set(true);
            continue;
        }

        let Some(raw) = tokens.get(i + 1).map(|next| next.as_ref()) else {
            let err = ScanError::MissingArgumentValue {
                key: argument.long_key().to_string(),
                value_name: argument.value_name().to_string(),
            };
            tracing::error!("{err}");
            return Err(err);
        };

        tracing::info!(argument = argument.long_key(), value = raw, "found argument");
        write_value(argument, raw)?;
    }

    Ok(ArgumentsOutcome::Completed)
}

/// Convert `raw` for `argument` and store it. The destination is left
/// untouched when conversion fails.
fn write_value(argument: &Argument, raw: &str) -> Result<(), ScanError> {
    let conversion = |source| ScanError::Conversion {
        key: argument.long_key().to_string(),
        source,
    };

    match argument.destination() {
        Destination::Integer(slot) => slot.set(convert::to_integer(raw).map_err(conversion)?),
        Destination::Float(slot) => slot.set(convert::to_double(raw).map_err(conversion)?),
        Destination::Str(slot) => slot.set(Some(raw.to_string())),
        Destination::Bool(slot) => slot.set(true),
    }
    Ok(())
}
