pub mod analyze;
pub mod install;
pub mod main_path;
pub mod resolve;
pub mod start_command;
pub mod versions;

pub use analyze::analyze_command;
pub use install::install_command;
pub use main_path::main_path_command;
pub use resolve::resolve_command;
pub use start_command::start_command_command;
pub use versions::versions_command;
