use log::{info, LevelFilter};

use crate::cli::commands::open_admin;
use crate::cli::logging::set_log_level;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(config: &Config, verbose: bool, quiet: bool) -> BoxResult<()> {
    // Set log level based on command line options
    if verbose {
        set_log_level(LevelFilter::Debug);
    } else if quiet {
        set_log_level(LevelFilter::Error);
    }

    let admin = open_admin(config)?;

    info!("Building site...");
    let stats = admin.regenerate()?;
    if stats.retained_pages > 0 {
        info!(
            "{} page(s) of unpublished or deleted posts left in {}",
            stats.retained_pages,
            config.posts_destination().display()
        );
    }
    info!("Site built successfully at {}", config.destination.display());
    Ok(())
}
