//! # SeeZee MCP Shared
//!
//! Common types and interfaces used across all seezee-mcp packages.

pub mod document;
pub mod error;
pub mod tool;

// Re-exports
pub use document::*;
pub use error::*;
pub use tool::*;
