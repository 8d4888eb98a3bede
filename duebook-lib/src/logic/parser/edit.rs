use super::tokenizer::{
    PREFIX_DEADLINE, PREFIX_MODULE_CODE, PREFIX_NAME, PREFIX_PRIORITY, tokenize,
};
use super::{Error, Result, fields};
use crate::logic::commands::{Command, EditCommand, EditDescriptor};

/// Parses the arguments of an `edit` command: an index in the preamble
/// plus at least one replacement field.
pub(super) fn parse(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_DEADLINE, PREFIX_MODULE_CODE, PREFIX_PRIORITY],
    );

    let index = fields::parse_index(map.preamble())
        .map_err(|_| Error::InvalidFormat(EditCommand::MESSAGE_USAGE))?;

    let descriptor = EditDescriptor {
        name: map.last(PREFIX_NAME).map(fields::parse_name).transpose()?,
        deadline: map
            .last(PREFIX_DEADLINE)
            .map(fields::parse_deadline)
            .transpose()?,
        module_code: map
            .last(PREFIX_MODULE_CODE)
            .map(fields::parse_module_code)
            .transpose()?,
        priority: map
            .last(PREFIX_PRIORITY)
            .map(fields::parse_priority)
            .transpose()?,
    };

    if descriptor.is_empty() {
        return Err(Error::NothingToEdit);
    }

    Ok(Command::Edit(EditCommand::new(index, descriptor)))
}
