//! Command and argument registries.
//!
//! Two append-only lists kept in registration order. Order matters for help
//! output and for which entry wins a lookup; keys are unique so lookups are
//! unambiguous in practice.

mod argument;
mod command;
mod destination;

pub use argument::Argument;
pub use command::{Callback, Command};
pub use destination::{Destination, Slot, ValueType};

use crate::error::RegistrationError;

#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<Command>,
    arguments: Vec<Argument>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Empty and duplicate keys are refused.
    pub fn add_command(&mut self, command: Command) -> Result<(), RegistrationError> {
        if command.key().is_empty() {
            return Err(RegistrationError::EmptyKey);
        }
        if self.find_command(command.key()).is_some() {
            return Err(RegistrationError::DuplicateCommand(command.key().to_string()));
        }

        tracing::debug!(key = command.key(), "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// Normalize and append an argument.
    ///
    /// Both keys share one namespace: `-v` cannot be the short key of one
    /// argument and the long key of another.
    pub fn add_argument(&mut self, mut argument: Argument) -> Result<(), RegistrationError> {
        if argument.long_key().is_empty() || argument.short_key() == Some("") {
            return Err(RegistrationError::EmptyKey);
        }

        let keys = std::iter::once(argument.long_key()).chain(argument.short_key());
        for key in keys {
            if self.find_argument(key).is_some() {
                return Err(RegistrationError::DuplicateArgument(key.to_string()));
            }
        }
        if argument.short_key() == Some(argument.long_key()) {
            return Err(RegistrationError::DuplicateArgument(
                argument.long_key().to_string(),
            ));
        }

        argument.normalize();
        if argument.is_flag() && !matches!(argument.destination(), Destination::Bool(_)) {
            return Err(RegistrationError::FlagDestination(
                argument.long_key().to_string(),
            ));
        }

        tracing::debug!(
            long = argument.long_key(),
            short = argument.short_key().unwrap_or(""),
            value_type = ?argument.value_type(),
            "registered argument"
        );
        self.arguments.push(argument);
        Ok(())
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.arguments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.arguments.is_empty()
    }

    /// Position of the command whose key equals `token`.
    pub fn find_command(&self, token: &str) -> Option<usize> {
        self.commands.iter().position(|cmd| cmd.key() == token)
    }

    /// True when `token` starts with some registered command key.
    ///
    /// Looser than [`Registry::find_command`]: `deploy-all`
    /// counts as a command token when `deploy` is registered.
    pub fn is_command_prefix(&self, token: &str) -> bool {
        self.commands.iter().any(|cmd| token.starts_with(cmd.key()))
    }

    /// The argument whose long or short key equals `token`.
    pub fn find_argument(&self, token: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.matches(token))
    }

    pub(crate) fn command_mut(&mut self, index: usize) -> &mut Command {
        &mut self.commands[index]
    }
}
