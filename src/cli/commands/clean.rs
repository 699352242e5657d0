use log::info;

use crate::config::Config;
use crate::utils::error::{BoxResult, FolioError};
use crate::utils::fs::remove_directory;

/// Handle the clean command; the document itself is never touched
pub fn handle_clean_command(config: &Config) -> BoxResult<()> {
    if config.data_file.starts_with(&config.destination) {
        return Err(FolioError::Config(format!(
            "Refusing to clean {}: it contains the document {}",
            config.destination.display(),
            config.data_file.display()
        ))
        .into());
    }

    info!("Cleaning site at {}", config.destination.display());
    remove_directory(&config.destination)?;
    info!("Site cleaned successfully");
    Ok(())
}
