//! The done/undone and remind/unremind command family.
//!
//! One command type covers all four directions. Each [`Toggle`] kind pairs
//! the view its index resolves against, the precondition the target must
//! satisfy, and the field replacement applied on success.

use super::{CommandResult, Error, Result};
use crate::logic::Index;
use crate::model::fields::{Done, Remind};
use crate::model::{Assignment, Model, Predicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    MarkDone,
    MarkUndone,
    SetRemind,
    ClearRemind,
}

impl Toggle {
    pub const fn command_word(self) -> &'static str {
        match self {
            Self::MarkDone => "done",
            Self::MarkUndone => "undone",
            Self::SetRemind => "remind",
            Self::ClearRemind => "unremind",
        }
    }

    pub const fn usage(self) -> &'static str {
        match self {
            Self::MarkDone => {
                "done: Marks the assignment identified by the index number \
                used in the displayed assignment list as done.\n\
                Parameters: INDEX (must be a positive integer)\nExample: done 1"
            }
            Self::MarkUndone => {
                "undone: Marks the assignment identified by the index number \
                used in the displayed assignment list as undone.\n\
                Parameters: INDEX (must be a positive integer)\nExample: undone 1"
            }
            Self::SetRemind => {
                "remind: Sets reminders for the assignment identified by the index number \
                used in the displayed assignment list. \
                Assignments with reminders set will appear in the displayed reminders list.\n\
                Parameters: INDEX (must be a positive integer)\nExample: remind 1"
            }
            Self::ClearRemind => {
                "unremind: Removes the reminder from the assignment identified by the index number \
                used in the displayed reminders list. \
                Assignments will no longer have reminders set and will be removed from the displayed \
                reminders list.\n\
                Parameters: INDEX (must be a positive integer)\nExample: unremind 1"
            }
        }
    }

    const fn already_message(self) -> &'static str {
        match self {
            Self::MarkDone => "This assignment is already marked as done.",
            Self::MarkUndone => "This assignment is not marked as done.",
            Self::SetRemind => "This assignment already has reminders set.",
            Self::ClearRemind => "This assignment does not have reminders set.",
        }
    }

    /// The view the target index resolves against. Clearing a reminder
    /// addresses the displayed reminders list; everything else addresses the
    /// displayed assignment list.
    fn view(self, model: &Model) -> Vec<Assignment> {
        match self {
            Self::MarkDone | Self::MarkUndone | Self::SetRemind => model.filtered_view(),
            Self::ClearRemind => model.reminded_view(),
        }
    }

    fn precondition_holds(self, target: &Assignment) -> bool {
        match self {
            Self::MarkDone => !target.done().is_marked(),
            Self::MarkUndone => target.done().is_marked(),
            Self::SetRemind => !target.remind().is_active(),
            Self::ClearRemind => target.remind().is_active(),
        }
    }

    fn apply(self, target: &Assignment) -> Assignment {
        match self {
            Self::MarkDone => target.with_done(Done::marked_now()),
            Self::MarkUndone => target.with_done(Done::cleared()),
            Self::SetRemind => target.with_remind(Remind::set_now()),
            Self::ClearRemind => target.with_remind(Remind::cleared()),
        }
    }

    fn success_message(self, updated: &Assignment) -> String {
        match self {
            Self::MarkDone => format!("Marks assignment as done: {updated}"),
            Self::MarkUndone => format!("Marks assignment as undone: {updated}"),
            Self::SetRemind => format!("Set reminder for Assignment: {updated}"),
            Self::ClearRemind => format!("Removed reminder for Assignment: {updated}"),
        }
    }
}

/// Flips one marker field on the assignment at one displayed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCommand {
    kind: Toggle,
    index: Index,
}

impl ToggleCommand {
    pub fn new(kind: Toggle, index: Index) -> Self {
        Self { kind, index }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let view = self.kind.view(model);
        let target = view.get(self.index.zero_based()).ok_or(Error::InvalidIndex)?;

        if !self.kind.precondition_holds(target) {
            return Err(Error::AlreadyToggled(self.kind.already_message()));
        }

        let updated = self.kind.apply(target);
        model.replace(target, updated.clone())?;
        model.set_filter(Predicate::ShowAll);

        Ok(CommandResult::message(self.kind.success_message(&updated)))
    }
}
