//! Example host for cli-dispatch.
//!
//! ```text
//! dispatch-demo hello Ada            Hello: Ada
//! dispatch-demo square 1.5           1.5 ^ 2 = 2.25
//! dispatch-demo --count 5 -v         prints the version and the count
//! dispatch-demo --help               help page, exit 0
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use cli_dispatch::{
    Argument, Command, Config, Dispatcher, LogLevel, ParseOutcome, Slot, convert, logging,
};

const EXIT_INIT_FAILURE: u8 = 1;
const EXIT_PARSE_FAILURE: u8 = 2;

fn command_hello(value: Option<&str>) {
    println!("Hello: {}", value.unwrap_or("(no value)"));
}

fn command_square(value: Option<&str>) {
    let Some(raw) = value else {
        return;
    };
    // Conversion errors are already reported by the converter.
    if let Ok(number) = convert::to_double(raw) {
        println!("{} ^ 2 = {:.2}", raw, number * number);
    }
}

struct Outputs {
    version: Slot<bool>,
    count: Slot<i64>,
}

fn setup(dispatcher: &mut Dispatcher) -> Result<Outputs> {
    dispatcher.init();
    dispatcher.set_config(
        Config::new("Example CLI")
            .log_level(LogLevel::ErrorsAndWarnings)
            .description("Simple example using the cli-dispatch library")
            .version(env!("CARGO_PKG_VERSION"))
            .license("MIT OR Apache-2.0"),
    );
    if !logging::init(dispatcher.config()) {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }

    dispatcher
        .add_command(
            Command::new("hello", command_hello)
                .with_required_value("Name")
                .description("Greet someone by name"),
        )
        .context("failed to add command: hello")?;
    dispatcher
        .add_command(
            Command::new("square", command_square)
                .with_required_value("Number (double)")
                .description("Print the square of a number"),
        )
        .context("failed to add command: square")?;

    let version = Slot::new(false);
    let count = Slot::new(0i64);

    dispatcher
        .add_argument(
            Argument::new("--version", version.clone())
                .short("-v")
                .description("Show version of the program"),
        )
        .context("failed to add argument: --version")?;
    dispatcher
        .add_argument(
            Argument::new("--count", count.clone())
                .short("-c")
                .with_required_value("Number")
                .description("Count until the number value"),
        )
        .context("failed to add argument: --count")?;
    dispatcher
        .generate_help()
        .context("failed to add argument: --help")?;

    for cmd in dispatcher.commands() {
        tracing::info!("command {} | {}", cmd.key(), cmd.value_name());
    }
    for arg in dispatcher.arguments() {
        tracing::info!("argument {} | {}", arg.long_key(), arg.value_name());
    }

    Ok(Outputs { version, count })
}

fn main() -> ExitCode {
    let mut dispatcher = Dispatcher::new();
    let outputs = match setup(&mut dispatcher) {
        Ok(outputs) => outputs,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(EXIT_INIT_FAILURE);
        }
    };

    let tokens: Vec<String> = std::env::args().collect();
    let code = match dispatcher.parse(&tokens) {
        Ok(ParseOutcome::Exit(exit)) => {
            print!("{}", exit.message);
            return ExitCode::from(u8::try_from(exit.code).unwrap_or(EXIT_PARSE_FAILURE));
        }
        Ok(ParseOutcome::Continue) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(EXIT_PARSE_FAILURE)
        }
    };

    if outputs.version.get() {
        println!("Version {}", env!("CARGO_PKG_VERSION"));
    }
    println!("The value of count is {}", outputs.count.get());

    dispatcher.free_all();
    code
}
