//! seezee get command

use anyhow::bail;
use clap::Args;
use shared::DocKind;
use std::path::PathBuf;
use store::DocumentStore;

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Document name (identity, services, tone, rules) or "all"
    pub name: String,

    /// Directory containing the four brand documents
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

impl GetCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> anyhow::Result<String> {
        let store = DocumentStore::new(&self.data_dir);

        let value = if self.name == "all" {
            store.load_all()?
        } else {
            match DocKind::from_name(&self.name) {
                Some(kind) => store.load(kind)?,
                None => bail!(
                    "unknown document '{}'. Expected one of: identity, services, tone, rules, all",
                    self.name
                ),
            }
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }
}
