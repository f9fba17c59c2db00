//! # SeeZee MCP CLI
//!
//! Command implementations for the `seezee` binary.

pub mod commands;
