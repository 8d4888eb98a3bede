use super::{CommandResult, Error, Result};
use crate::logic::Index;
use crate::model::fields::{Deadline, ModuleCode, Name, Priority};
use crate::model::{Assignment, Model, Predicate};

/// The optional replacement fields collected by the edit parser. At least
/// one is always present once parsing succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub deadline: Option<Deadline>,
    pub module_code: Option<ModuleCode>,
    pub priority: Option<Priority>,
}

impl EditDescriptor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.deadline.is_none()
            && self.module_code.is_none()
            && self.priority.is_none()
    }

    fn apply(&self, target: &Assignment) -> Assignment {
        Assignment::from_parts(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.deadline.unwrap_or(target.deadline()),
            self.module_code
                .clone()
                .unwrap_or_else(|| target.module_code().clone()),
            target.remind(),
            target.schedule(),
            self.priority.or(target.priority()),
            target.done(),
        )
    }
}

/// Replaces the fields of the assignment at one displayed index.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the assignment identified by the index number \
        used in the displayed assignment list.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [d/DEADLINE] [mod/MODULE_CODE] [priority/PRIORITY]\n\
        Example: edit 1 d/24-10-2020 2359";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: Index, descriptor: EditDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let view = model.filtered_view();
        let target = view.get(self.index.zero_based()).ok_or(Error::InvalidIndex)?;

        let edited = self.descriptor.apply(target);
        model.replace(target, edited.clone())?;
        model.set_filter(Predicate::ShowAll);

        Ok(CommandResult::message(format!("Edited Assignment: {edited}")))
    }
}
