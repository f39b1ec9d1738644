//! Process Runner Implementations

mod command;

pub use command::CommandRunner;
