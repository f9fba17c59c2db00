//! CLI commands

mod get;
mod serve;
mod tools;

pub use get::GetCommand;
pub use serve::ServeCommand;
pub use tools::ToolsCommand;
