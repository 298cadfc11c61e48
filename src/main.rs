// Entrypoint for the inventory CLI.
// - Keeps `main` small: resolve config, start the log, open the catalog and
//   hand it to the UI loop.
// - Returns `anyhow::Result` so setup failures are reported with context.

use library_inventory::config::Config;
use library_inventory::logging::init_logging;
use library_inventory::ui::main_menu;
use library_inventory::{CatalogStore, LogSink};

fn main() -> anyhow::Result<()> {
    // Paths and level come from `LIBRARY_CATALOG`, `LIBRARY_LOG_DIR` and
    // `LIBRARY_LOG_LEVEL`. See `config::Config::from_env`.
    let config = Config::from_env();

    // Held until exit so buffered log lines are flushed.
    let _logger = init_logging(&config.log_level, &config.log_dir)?;

    let store = CatalogStore::open(&config.catalog_path, LogSink);

    // Blocks until the user picks "Exit".
    main_menu(store)?;
    Ok(())
}
