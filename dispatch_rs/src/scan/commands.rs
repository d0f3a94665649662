//! Command scanning: find command keys in argv and run their callbacks.

use crate::error::ScanError;
use crate::registry::Registry;

/// Walk `tokens` once and invoke every matching command.
///
/// Index 0 is the program name and never matches. A command that accepts a
/// value takes the next token unless that token looks like a command itself
/// (it starts with any registered key); in that case the command fires without
/// a value and the next token is scanned on its own.
///
/// A missing required value aborts the pass. Callbacks that already ran stay
/// run.
pub(crate) fn scan_commands<S: AsRef<str>>(
    registry: &mut Registry,
    tokens: &[S],
) -> Result<(), ScanError> {
    if registry.commands().is_empty() {
        return Ok(());
    }
    // A bare program name is a valid invocation, not a missing command.
    if tokens.len() < 2 {
        tracing::debug!("no tokens after the program name, nothing to dispatch");
        return Ok(());
    }

    let mut i = 1;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        let Some(index) = registry.find_command(token) else {
            i += 1;
            continue;
        };

        let has_next = i + 1 < tokens.len();
        let command = &registry.commands()[index];

        if command.is_value_required() && !has_next {
            let err = ScanError::MissingCommandValue {
                key: command.key().to_string(),
                value_name: command.value_name().to_string(),
            };
            tracing::error!("{err}");
            return Err(err);
        }

        if command.has_value() && has_next {
            let next = tokens[i + 1].as_ref();
            if registry.is_command_prefix(next) {
                tracing::debug!(command = token, next, "next token is a command, not a value");
                registry.command_mut(index).invoke(None);
                i += 1;
            } else {
                tracing::info!(command = token, value = next, "found command");
                registry.command_mut(index).invoke(Some(next));
                i += 2;
            }
            continue;
        }

        tracing::info!(command = token, "found command");
        registry.command_mut(index).invoke(None);
        i += 1;
    }

    Ok(())
}
