use log::info;

use crate::cli::commands::open_admin;
use crate::config::Config;
use crate::document::seed::default_document;
use crate::document::{DocumentRepository, JsonFileStore};
use crate::utils::error::BoxResult;

/// Handle the init command: seed the document, then generate the site
pub fn handle_init_command(config: &Config, force: bool) -> BoxResult<()> {
    let store = JsonFileStore::new(&config.data_file);

    if force {
        info!("Replacing document at {} with the default one", store.path().display());
        store.save(&default_document())?;
    } else if !store.initialize()? {
        info!("Keeping existing document at {} (use --force to replace it)", store.path().display());
    }

    let admin = open_admin(config)?;
    admin.regenerate()?;
    info!("Site ready at {}", config.destination.display());
    Ok(())
}
