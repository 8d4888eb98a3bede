//! Command objects and their execution against the model.
//!
//! Every semantic check happens before any mutation: a command either
//! applies completely or leaves the model untouched.

use getset::{CopyGetters, Getters};
use thiserror::Error;

use crate::model::{self, Model};

pub mod validation;

mod add;
mod clear;
mod delete;
mod edit;
mod find;
mod list;
mod toggle;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditDescriptor};
pub use find::FindCommand;
pub use list::ListCommand;
pub use toggle::{Toggle, ToggleCommand};

pub type Result<T> = std::result::Result<T, Error>;

/// Failures detected at execution time, after parsing succeeded. None of
/// these leave the model partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The assignment index provided is invalid")]
    InvalidIndex,
    #[error("The assignment index provided is invalid \n{0}")]
    InvalidIndexWithUsage(&'static str),
    #[error("Please ensure that there are no duplicated indexes.")]
    DuplicateIndexes,
    #[error("{0}")]
    AlreadyToggled(&'static str),
    #[error(transparent)]
    Model(#[from] model::Error),
}

/// What a command hands back to the front end: a feedback message plus
/// flags the front end acts on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, CopyGetters)]
pub struct CommandResult {
    #[getset(get = "pub")]
    feedback: String,
    #[getset(get_copy = "pub")]
    show_help: bool,
    #[getset(get_copy = "pub")]
    exit: bool,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    fn help(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: true,
            exit: false,
        }
    }

    fn exiting(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: true,
        }
    }
}

/// The closed set of commands the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Toggle(ToggleCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Toggle(command) => command.execute(model),
            Self::Clear(command) => command.execute(model),
            Self::Help(command) => Ok(command.execute()),
            Self::Exit(command) => Ok(command.execute()),
        }
    }

    /// Whether a successful run changes the canonical list and therefore
    /// needs persisting.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Edit(_) | Self::Delete(_) | Self::Toggle(_) | Self::Clear(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows the list of available commands.\nExample: help";
    const MESSAGE_SHOWING_HELP: &'static str = "Showing help.";

    fn execute(self) -> CommandResult {
        CommandResult::help(Self::MESSAGE_SHOWING_HELP)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    const MESSAGE_EXIT: &'static str = "Exiting duebook as requested ...";

    fn execute(self) -> CommandResult {
        CommandResult::exiting(Self::MESSAGE_EXIT)
    }
}
