//! Shared vocabulary: input events and semantic commands.

pub mod command;
pub mod event;

pub use command::Command;
