use std::fmt::{self, Display, Formatter};

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::model::fields::{Deadline, Done, ModuleCode, Name, Priority, Remind, Schedule};

/// An immutable assignment record.
///
/// There is no identity field: two assignments are the same assignment iff
/// every field matches. Commands that change an assignment build a fresh
/// value and ask the [`Model`](super::Model) to swap it in.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Assignment {
    #[getset(get = "pub")]
    name: Name,
    #[getset(get_copy = "pub")]
    deadline: Deadline,
    #[getset(get = "pub")]
    module_code: ModuleCode,
    #[getset(get_copy = "pub")]
    priority: Option<Priority>,
    #[getset(get_copy = "pub")]
    remind: Remind,
    #[getset(get_copy = "pub")]
    schedule: Schedule,
    #[getset(get_copy = "pub")]
    done: Done,
}

impl Assignment {
    /// A freshly added assignment: no reminder, no schedule, not done.
    pub fn new(
        name: Name,
        deadline: Deadline,
        module_code: ModuleCode,
        priority: Option<Priority>,
    ) -> Self {
        Self {
            name,
            deadline,
            module_code,
            priority,
            remind: Remind::cleared(),
            schedule: Schedule::none(),
            done: Done::cleared(),
        }
    }

    pub fn from_parts(
        name: Name,
        deadline: Deadline,
        module_code: ModuleCode,
        remind: Remind,
        schedule: Schedule,
        priority: Option<Priority>,
        done: Done,
    ) -> Self {
        Self {
            name,
            deadline,
            module_code,
            priority,
            remind,
            schedule,
            done,
        }
    }

    /// A copy of this assignment with only the done marker replaced.
    pub fn with_done(&self, done: Done) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// A copy of this assignment with only the reminder replaced.
    pub fn with_remind(&self, remind: Remind) -> Self {
        Self {
            remind,
            ..self.clone()
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) due {}", self.name, self.module_code, self.deadline)?;

        if let Some(priority) = self.priority {
            write!(f, " [{priority}]")?;
        }
        if self.done.is_marked() {
            write!(f, " [done]")?;
        }
        if self.remind.is_active() {
            write!(f, " [reminder set]")?;
        }

        Ok(())
    }
}
