use super::tokenizer::{
    PREFIX_DEADLINE, PREFIX_MODULE_CODE, PREFIX_NAME, PREFIX_PRIORITY, tokenize,
};
use super::{Error, Result, fields};
use crate::logic::commands::{AddCommand, Command};
use crate::model::Assignment;

/// Parses the arguments of an `add` command. Name, deadline and module
/// code are required; when a prefix repeats, the last occurrence wins.
pub(super) fn parse(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_DEADLINE, PREFIX_MODULE_CODE, PREFIX_PRIORITY],
    );

    let required_present =
        map.contains(PREFIX_NAME) && map.contains(PREFIX_DEADLINE) && map.contains(PREFIX_MODULE_CODE);

    if !required_present || !map.preamble().is_empty() {
        return Err(Error::InvalidFormat(AddCommand::MESSAGE_USAGE));
    }

    let name = fields::parse_name(map.last(PREFIX_NAME).unwrap_or_default())?;
    let deadline = fields::parse_deadline(map.last(PREFIX_DEADLINE).unwrap_or_default())?;
    let module_code = fields::parse_module_code(map.last(PREFIX_MODULE_CODE).unwrap_or_default())?;
    let priority = map
        .last(PREFIX_PRIORITY)
        .map(fields::parse_priority)
        .transpose()?;

    Ok(Command::Add(AddCommand::new(Assignment::new(
        name,
        deadline,
        module_code,
        priority,
    ))))
}
