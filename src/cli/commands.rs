//! Shell command table and usage text.

use std::io;

use crate::config::ConfigError;
use crate::errors::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Enter,
    Set,
    Next,
    Edit,
    Save,
    Cancel,
    Show,
    Json,
    Fields,
    Wait,
    Help,
    Version,
    Exit,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub command: Command,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "enter",
        command: Command::Enter,
        usage: "enter <value>",
        summary: "Answer the current wizard step and advance",
    },
    CommandSpec {
        name: "set",
        command: Command::Set,
        usage: "set <field> <value>",
        summary: "Change a field's value without validating it",
    },
    CommandSpec {
        name: "next",
        command: Command::Next,
        usage: "next",
        summary: "Validate the current wizard step and advance (submits on the last step)",
    },
    CommandSpec {
        name: "submit",
        command: Command::Next,
        usage: "submit",
        summary: "Alias for `next`",
    },
    CommandSpec {
        name: "edit",
        command: Command::Edit,
        usage: "edit",
        summary: "Open the submitted data for bulk editing",
    },
    CommandSpec {
        name: "save",
        command: Command::Save,
        usage: "save",
        summary: "Validate every field and save the edit",
    },
    CommandSpec {
        name: "cancel",
        command: Command::Cancel,
        usage: "cancel",
        summary: "Leave edit mode without validating",
    },
    CommandSpec {
        name: "show",
        command: Command::Show,
        usage: "show",
        summary: "Render the form again",
    },
    CommandSpec {
        name: "json",
        command: Command::Json,
        usage: "json",
        summary: "Print the current view as JSON",
    },
    CommandSpec {
        name: "fields",
        command: Command::Fields,
        usage: "fields",
        summary: "List the form's fields",
    },
    CommandSpec {
        name: "wait",
        command: Command::Wait,
        usage: "wait <milliseconds>",
        summary: "Let time pass so transient messages can expire",
    },
    CommandSpec {
        name: "help",
        command: Command::Help,
        usage: "help [command]",
        summary: "Show available commands",
    },
    CommandSpec {
        name: "version",
        command: Command::Version,
        usage: "version",
        summary: "Show build information",
    },
    CommandSpec {
        name: "exit",
        command: Command::Exit,
        usage: "exit",
        summary: "Leave the shell",
    },
    CommandSpec {
        name: "quit",
        command: Command::Exit,
        usage: "quit",
        summary: "Alias for `exit`",
    },
];

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

pub fn names() -> Vec<&'static str> {
    COMMANDS.iter().map(|spec| spec.name).collect()
}

/// Closest known command within a small edit distance.
pub fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| (strsim::levenshtein(spec.name, input), spec.name))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
