use std::io;

use anyhow::Context;
use stockroom_cli::{Config, Menu};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    let mut inventory = Inventory::new(&config.inventory_file);
    inventory.load().with_context(|| {
        format!(
            "failed to load inventory from {}",
            config.inventory_file.display()
        )
    })?;

    tracing::info!(path = %config.inventory_file.display(), count = inventory.len(), "starting menu");

    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());
    menu.run(&mut inventory)
}
