//! Turns raw command text into command objects.
//!
//! Parsing never touches the model: every failure here is recoverable and
//! leaves no state behind.

use thiserror::Error;

use crate::logic::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand, Toggle, ToggleCommand,
};
use crate::model;

pub mod fields;
pub mod tokenizer;

mod add;
mod delete;
mod edit;
mod find;
mod list;

pub type Result<T> = std::result::Result<T, Error>;

/// Malformed or ambiguous input, detected entirely before any model
/// access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(&'static str),
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
    #[error(transparent)]
    InvalidField(#[from] model::fields::Error),
}

/// Parses one raw input line into a [`Command`].
pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match word {
        "" => Err(Error::InvalidFormat(HelpCommand::MESSAGE_USAGE)),
        AddCommand::COMMAND_WORD => add::parse(args),
        EditCommand::COMMAND_WORD => edit::parse(args),
        DeleteCommand::COMMAND_WORD => delete::parse(args),
        FindCommand::COMMAND_WORD => find::parse(args),
        ListCommand::COMMAND_WORD => list::parse(args),
        word if word == Toggle::MarkDone.command_word() => parse_toggle(Toggle::MarkDone, args),
        word if word == Toggle::MarkUndone.command_word() => parse_toggle(Toggle::MarkUndone, args),
        word if word == Toggle::SetRemind.command_word() => parse_toggle(Toggle::SetRemind, args),
        word if word == Toggle::ClearRemind.command_word() => {
            parse_toggle(Toggle::ClearRemind, args)
        }
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
        HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(Error::UnknownCommand),
    }
}

fn parse_toggle(kind: Toggle, args: &str) -> Result<Command> {
    let index = fields::parse_index(args).map_err(|_| Error::InvalidFormat(kind.usage()))?;

    Ok(Command::Toggle(ToggleCommand::new(kind, index)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::logic::Index;
    use crate::logic::commands::ToggleCommand;

    #[test]
    fn test_empty_input_cites_help_usage() {
        assert_eq!(
            parse_command("   "),
            Err(Error::InvalidFormat(HelpCommand::MESSAGE_USAGE))
        );
    }

    #[test]
    fn test_unknown_command_word() {
        assert_eq!(parse_command("frobnicate 1"), Err(Error::UnknownCommand));
    }

    #[test]
    fn test_wordless_commands_ignore_trailing_text() {
        assert_eq!(parse_command("clear 3"), Ok(Command::Clear(ClearCommand)));
        assert_eq!(parse_command("help 3"), Ok(Command::Help(HelpCommand)));
        assert_eq!(parse_command("exit 3"), Ok(Command::Exit(ExitCommand)));
    }

    #[test]
    fn test_toggle_words_dispatch_with_index() {
        let expected = Command::Toggle(ToggleCommand::new(
            Toggle::MarkUndone,
            Index::from_one_based(2).unwrap(),
        ));

        assert_eq!(parse_command("undone 2"), Ok(expected));
    }

    #[test]
    fn test_toggle_without_index_cites_its_usage() {
        assert_eq!(
            parse_command("remind"),
            Err(Error::InvalidFormat(Toggle::SetRemind.usage()))
        );
        assert_eq!(
            parse_command("done zero"),
            Err(Error::InvalidFormat(Toggle::MarkDone.usage()))
        );
    }
}
