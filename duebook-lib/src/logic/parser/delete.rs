use super::{Error, Result, fields};
use crate::logic::commands::{Command, DeleteCommand};

/// Parses the arguments of a `delete` command: one or more one-based
/// indexes in the order given. Duplicates pass here; execution rejects
/// them.
pub(super) fn parse(args: &str) -> Result<Command> {
    let indexes = fields::parse_indexes(args)
        .map_err(|_| Error::InvalidFormat(DeleteCommand::MESSAGE_USAGE))?;

    Ok(Command::Delete(DeleteCommand::new(indexes)))
}
