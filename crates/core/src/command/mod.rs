//! Launch command synthesis

mod start_command;

pub use start_command::StartCommand;
