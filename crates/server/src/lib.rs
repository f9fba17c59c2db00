//! # SeeZee MCP Server
//!
//! Binds the tool catalog and the document store to a JSON-RPC 2.0
//! stdio transport.

pub mod protocol;
pub mod router;
pub mod stdio;

pub use router::ToolRouter;
pub use stdio::McpServer;
