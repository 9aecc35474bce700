pub(crate) mod show;
pub(crate) mod watch;

use crate::cli::{Cli, Commands};
use anyhow::Context;
use libtempo::Item;
use std::{fs, path::Path};

pub fn entry(cli: Cli) -> anyhow::Result<()> {
    match cli.commands {
        Commands::Show(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    }
}

trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

/// Loads and validates the item snapshots the commands consume.
/// Anything malformed is rejected here, before the engine sees it.
fn load_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    for item in &items {
        item.validate()
            .with_context(|| format!("invalid item {:?}", item.id()))?;
    }
    log::debug!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
