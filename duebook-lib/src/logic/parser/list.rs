use super::{Error, Result};
use crate::logic::commands::{Command, ListCommand};

const MAX_DAYS: u32 = 50;

/// Parses the arguments of a `list` command: nothing, or a day window
/// between 1 and 50.
pub(super) fn parse(args: &str) -> Result<Command> {
    let trimmed = args.trim();

    if trimmed.is_empty() {
        return Ok(Command::List(ListCommand::show_all()));
    }

    trimmed
        .parse::<u32>()
        .ok()
        .filter(|days| (1..=MAX_DAYS).contains(days))
        .map(|days| Command::List(ListCommand::due_within(days)))
        .ok_or(Error::InvalidFormat(ListCommand::MESSAGE_USAGE))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bare_list_shows_all() {
        assert_eq!(parse(""), Ok(Command::List(ListCommand::show_all())));
        assert_eq!(parse("  "), Ok(Command::List(ListCommand::show_all())));
    }

    #[test]
    fn test_day_window() {
        assert_eq!(parse("3"), Ok(Command::List(ListCommand::due_within(3))));
        assert_eq!(parse("50"), Ok(Command::List(ListCommand::due_within(50))));
    }

    #[test]
    fn test_out_of_range_or_garbage_cites_usage() {
        assert_eq!(parse("0"), Err(Error::InvalidFormat(ListCommand::MESSAGE_USAGE)));
        assert_eq!(parse("51"), Err(Error::InvalidFormat(ListCommand::MESSAGE_USAGE)));
        assert_eq!(parse("abc"), Err(Error::InvalidFormat(ListCommand::MESSAGE_USAGE)));
    }
}
