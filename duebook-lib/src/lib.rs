//! Core engine for duebook, a command-driven assignment manager.
//!
//! The library owns the whole text-to-mutation pipeline: raw command lines
//! are tokenized and parsed into command objects, which execute against the
//! in-memory [`Model`] and report back through a [`CommandResult`]. Front
//! ends only feed lines in and render what comes out.

pub mod fs;
pub mod logic;
pub mod model;
pub mod storage;

pub use logic::{Command, CommandResult, Error, Logic, Result};
pub use model::{Assignment, Model};
pub use storage::Storage;

#[cfg(test)]
pub(crate) mod testutil;
