//! seezee tools command

use clap::Args;
use shared::catalog;

#[derive(Debug, Args)]
pub struct ToolsCommand {
    /// Output the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl ToolsCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let tools = catalog();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&tools)?);
        } else {
            for tool in tools {
                println!("{:<14} {}", tool.name, tool.description.unwrap_or_default());
            }
        }

        Ok(())
    }
}
