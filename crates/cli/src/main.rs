//! SeeZee MCP CLI - Brand-context MCP server for SeeZee Studios
//!
//! Usage:
//!   seezee                    - Start the MCP server on stdio
//!   seezee serve              - Same, explicit
//!   seezee tools              - Print the tool catalog
//!   seezee get <doc>          - Print one document (or "all")

use clap::{Parser, Subcommand};
use cli::commands::{GetCommand, ServeCommand, ToolsCommand};

#[derive(Parser)]
#[command(name = "seezee")]
#[command(about = "SeeZee Studios brand-context MCP server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server on stdio
    Serve(ServeCommand),
    /// Print the advertised tool catalog
    Tools(ToolsCommand),
    /// Print a brand document without going through the transport
    Get(GetCommand),
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout is reserved for the protocol
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(cmd)) => cmd.run(),
        Some(Commands::Tools(cmd)) => cmd.run(),
        Some(Commands::Get(cmd)) => cmd.run(),
        // No subcommand - serve, matching how MCP clients spawn servers
        None => ServeCommand::default().run(),
    }
}
