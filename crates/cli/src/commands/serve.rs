//! seezee serve command

use clap::Args;
use server::McpServer;
use std::io;
use std::path::PathBuf;
use store::DocumentStore;

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Directory containing the four brand documents
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

impl Default for ServeCommand {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl ServeCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        tracing::info!(data_dir = %self.data_dir.display(), "starting MCP server");

        let store = DocumentStore::new(&self.data_dir);
        let server = McpServer::new(store);

        let stdin = io::stdin();
        let stdout = io::stdout();
        server.serve(stdin.lock(), stdout.lock())?;

        Ok(())
    }
}
