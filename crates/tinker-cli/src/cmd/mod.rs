//! Subcommand handlers, one module per command.

pub mod add;
pub mod categories;
pub mod like;
pub mod list;
pub mod progress;
pub mod save;
pub mod search;
pub mod shell;
pub mod show;
