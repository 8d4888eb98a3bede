//! The text-to-mutation pipeline: parse, execute, persist.

use thiserror::Error;
use tracing::debug;

use crate::model::Model;
use crate::storage::{self, Storage};

pub mod commands;
pub mod parser;

pub use commands::{Command, CommandResult};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] parser::Error),
    #[error(transparent)]
    Command(#[from] commands::Error),
    #[error(transparent)]
    Storage(#[from] storage::Error),
}

/// A position in a displayed list. One-based in user input, zero-based
/// internally; always resolved against the relevant view at execution
/// time, never against the canonical list directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(value)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0.saturating_add(1)
    }
}

/// Front door for front ends: owns the model and its storage, runs one
/// raw command line at a time.
///
/// Execution is strictly sequential; a command runs to completion before
/// the next line is accepted. The canonical list is persisted after every
/// successfully executed mutating command.
#[derive(Debug)]
pub struct Logic {
    model: Model,
    storage: Storage,
}

impl Logic {
    /// Loads the persisted assignment list and builds the engine around it.
    pub fn new(storage: Storage) -> Result<Self> {
        let model = Model::new(storage.load()?);

        Ok(Self { model, storage })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Runs one raw input line through parse, execute and persist.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        debug!(input, "executing command line");

        let command = parser::parse_command(input)?;
        let result = command.execute(&mut self.model)?;

        if command.is_mutating() {
            self.storage.save(self.model.assignments())?;
        }

        Ok(result)
    }
}
