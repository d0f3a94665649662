//! Help page rendering.
//!
//! Reads the configuration and both registries, never mutates them.

use crate::config::Config;
use crate::registry::{Argument, Command, Registry};

/// Render the full help page for `program` (usually `argv[0]`).
pub fn render(config: &Config, registry: &Registry, program: &str) -> String {
    let mut help = String::new();

    if !config.name.is_empty() {
        if let Some(version) = &config.version {
            help.push_str(&format!("{} (v{})\n", config.name, version));
        }
    }

    match &config.usage {
        Some(usage) => help.push_str(&format!("Usage: {usage}\n")),
        None => help.push_str(&format!("Usage: {program} [options] [arguments]\n")),
    }

    if let Some(description) = &config.description {
        help.push_str(&format!("\n{description}\n"));
    }

    let command_labels: Vec<String> = registry.commands().iter().map(command_label).collect();
    let argument_labels: Vec<String> = registry.arguments().iter().map(argument_label).collect();

    // One column width for both sections so descriptions line up.
    let width = command_labels
        .iter()
        .chain(&argument_labels)
        .map(String::len)
        .max()
        .unwrap_or(0);

    if !command_labels.is_empty() {
        help.push_str("\nCommands:\n");
        for (label, cmd) in command_labels.iter().zip(registry.commands()) {
            help.push_str(&row(label, cmd.desc(), width));
        }
    }

    if !argument_labels.is_empty() {
        help.push_str("\nArguments:\n");
        for (label, arg) in argument_labels.iter().zip(registry.arguments()) {
            help.push_str(&row(label, arg.desc(), width));
        }
    }

    if let Some(copyright) = &config.copyright {
        help.push_str(&format!("\n{copyright}\n"));
    }
    if let Some(license) = &config.license {
        help.push_str(&format!("This software is under {license} license.\n"));
    }

    help
}

fn row(label: &str, description: &str, width: usize) -> String {
    format!("  {label:<width$}  {description}")
        .trim_end()
        .to_string()
        + "\n"
}

/// `hello <Name>`, `greet [Name]`, or just `status`.
fn command_label(cmd: &Command) -> String {
    if !cmd.has_value() {
        return cmd.key().to_string();
    }
    let name = if cmd.value_name().is_empty() {
        "value"
    } else {
        cmd.value_name()
    };
    if cmd.is_value_required() {
        format!("{} <{}>", cmd.key(), name)
    } else {
        format!("{} [{}]", cmd.key(), name)
    }
}

/// `-c, --count <Number>` or `--version`.
fn argument_label(arg: &Argument) -> String {
    let mut label = match arg.short_key() {
        Some(short) => format!("{}, {}", short, arg.long_key()),
        None => arg.long_key().to_string(),
    };
    if !arg.is_flag() {
        let name = if arg.value_name().is_empty() {
            "value"
        } else {
            arg.value_name()
        };
        label.push_str(&format!(" <{name}>"));
    }
    label
}
