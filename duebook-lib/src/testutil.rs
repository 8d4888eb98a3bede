//! Builders shared by the in-crate tests.

use crate::model::Assignment;
use crate::model::fields::{Deadline, Done, ModuleCode, Name, Priority, Remind, Schedule};

/// Builds [`Assignment`] values with sensible defaults, overriding only
/// what a test cares about.
pub(crate) struct AssignmentBuilder {
    name: String,
    deadline: String,
    module_code: String,
    priority: Option<Priority>,
    remind: Remind,
    done: Done,
}

impl AssignmentBuilder {
    pub fn new() -> Self {
        Self {
            name: "Lab Report 3".to_string(),
            deadline: "23-10-2020 1200".to_string(),
            module_code: "CS2100".to_string(),
            priority: None,
            remind: Remind::cleared(),
            done: Done::cleared(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn deadline(mut self, deadline: &str) -> Self {
        self.deadline = deadline.to_string();
        self
    }

    pub fn module_code(mut self, module_code: &str) -> Self {
        self.module_code = module_code.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn reminded(mut self) -> Self {
        self.remind = Remind::set_now();
        self
    }

    pub fn done(mut self) -> Self {
        self.done = Done::marked_now();
        self
    }

    pub fn build(self) -> Assignment {
        Assignment::from_parts(
            Name::new(&self.name).unwrap(),
            Deadline::new(&self.deadline).unwrap(),
            ModuleCode::new(&self.module_code).unwrap(),
            self.remind,
            Schedule::none(),
            self.priority,
            self.done,
        )
    }
}
