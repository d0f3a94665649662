//! The dispatcher context: configuration, registries, and the parse entry point.

use crate::config::Config;
use crate::error::{ParseError, RegistrationError};
use crate::help;
use crate::registry::{Argument, Command, Registry, Slot};
use crate::scan::{self, ArgumentsOutcome, HELP_LONG_KEY, HELP_SHORT_KEY};

/// The host asked to stop; it decides whether and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequest {
    /// Suggested process exit status
    pub code: i32,
    /// Text to show before exiting (the rendered help page)
    pub message: String,
}

/// Result of a successful [`Dispatcher::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ParseOutcome {
    /// All matches were dispatched, carry on
    Continue,
    /// Help was requested; nothing after `--help` was processed
    Exit(ExitRequest),
}

/// Owns everything a host registers. One dispatcher per parser; nothing is
/// global, so independent dispatchers can coexist.
#[derive(Debug, Default)]
pub struct Dispatcher {
    config: Config,
    registry: Registry,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset both registries to empty. The configuration is kept.
    pub fn init(&mut self) {
        self.registry.clear();
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn add_command(&mut self, command: Command) -> Result<(), RegistrationError> {
        let key = command.key().to_string();
        self.registry.add_command(command).inspect_err(|err| {
            tracing::error!(key = %key, "failed to add command: {err}");
        })
    }

    pub fn add_argument(&mut self, argument: Argument) -> Result<(), RegistrationError> {
        let key = argument.long_key().to_string();
        self.registry.add_argument(argument).inspect_err(|err| {
            tracing::error!(key = %key, "failed to add argument: {err}");
        })
    }

    pub fn commands(&self) -> &[Command] {
        self.registry.commands()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.registry.arguments()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register the built-in `--help`/`-h` flag.
    pub fn generate_help(&mut self) -> Result<(), RegistrationError> {
        let help = Argument::new(HELP_LONG_KEY, Slot::new(false))
            .short(HELP_SHORT_KEY)
            .description("Show help list");
        self.add_argument(help).inspect_err(|_| {
            tracing::error!("error during `--help` generation");
        })
    }

    pub fn render_help(&self, program: &str) -> String {
        help::render(&self.config, &self.registry, program)
    }

    /// Dispatch `tokens` (program name first) to commands and arguments.
    ///
    /// Commands are scanned first, then arguments; the second scan runs even
    /// if the first failed. A help request wins over any failure and yields
    /// [`ParseOutcome::Exit`] with the rendered help page. Callbacks and writes
    /// made before a failure are not undone.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<ParseOutcome, ParseError> {
        let commands = scan::scan_commands(&mut self.registry, tokens);
        let arguments = scan::scan_arguments(&self.registry, tokens);

        let mut failures = Vec::new();
        if let Err(err) = commands {
            failures.push(err);
        }

        match arguments {
            Ok(ArgumentsOutcome::HelpRequested) => {
                let program = tokens
                    .first()
                    .map(|token| token.as_ref())
                    .unwrap_or(self.config.name.as_str());
                return Ok(ParseOutcome::Exit(ExitRequest {
                    code: 0,
                    message: self.render_help(program),
                }));
            }
            Ok(ArgumentsOutcome::Completed) => {}
            Err(err) => failures.push(err),
        }

        if failures.is_empty() {
            return Ok(ParseOutcome::Continue);
        }

        let err = ParseError { failures };
        tracing::error!("{err}");
        Err(err)
    }

    /// Release every registered command and argument.
    pub fn free_all(&mut self) {
        self.registry.clear();
    }
}
