//! Line-oriented shell that drives a [`BudgetController`] from text commands.

pub mod commands;
pub mod shell;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::controller::BudgetController;
use crate::errors::{ConfigError, LedgerError};
use crate::presentation::{FormatOptions, InputError};

pub use shell::{handle_line, run_script};

/// Fatal shell failures; these end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Per-command failures; the shell reports them and keeps reading.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Could not parse line: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown command `{command}`{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        command: String,
        suggestion: Option<&'static str>,
    },
}

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// State shared by every command in one shell session.
pub struct ShellContext {
    pub controller: BudgetController,
    pub options: FormatOptions,
    pub today: NaiveDate,
}

impl ShellContext {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            controller: BudgetController::new(),
            options,
            today: Local::now().date_naive(),
        }
    }

    /// Pins the date used for the period heading.
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}
