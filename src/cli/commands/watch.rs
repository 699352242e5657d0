use std::sync::atomic::AtomicBool;

use log::info;

use crate::builder::watch_document;
use crate::cli::commands::open_admin;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Handle the watch command: build once, then rebuild on every document change
pub fn handle_watch_command(config: &Config) -> BoxResult<()> {
    let admin = open_admin(config)?;

    info!("Building site...");
    admin.regenerate()?;

    // Runs until the process is interrupted
    let stop = AtomicBool::new(false);
    watch_document(&config.data_file, &stop, || admin.regenerate().map(|_| ()))
}
