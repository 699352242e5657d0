use std::path::Path;

use crate::config::Config;
use crate::utils::error::{BoxResult, FolioError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_posts_dir(config)?;
    validate_page_extension(config)?;
    validate_page_names(config)?;
    Ok(())
}

/// The posts directory must be a single relative path component
fn validate_posts_dir(config: &Config) -> BoxResult<()> {
    if is_single_component(&config.posts_dir) {
        return Ok(());
    }
    Err(FolioError::Config(format!(
        "posts_dir must be a single directory name, got '{}'", config.posts_dir
    )).into())
}

fn validate_page_extension(config: &Config) -> BoxResult<()> {
    let ext = &config.page_extension;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FolioError::Config(format!(
            "page_extension must be non-empty and alphanumeric, got '{}'", ext
        )).into());
    }
    Ok(())
}

/// Home and blog pages are plain file names at the destination root
fn validate_page_names(config: &Config) -> BoxResult<()> {
    for (key, name) in [("home_page", &config.home_page), ("blog_page", &config.blog_page)] {
        if !is_single_component(name) {
            return Err(FolioError::Config(format!(
                "{} must be a single file name, got '{}'", key, name
            )).into());
        }

        if *name == config.posts_dir {
            return Err(FolioError::Config(format!(
                "{} must differ from posts_dir, both are '{}'", key, name
            )).into());
        }
    }

    if config.home_page == config.blog_page {
        return Err(FolioError::Config(format!(
            "home_page and blog_page must differ, both are '{}'", config.home_page
        )).into());
    }

    Ok(())
}

// One plain path component: no separators, no `.` or `..`, no padding
fn is_single_component(name: &str) -> bool {
    Path::new(name).file_name().map_or(false, |file| file == name) && name.trim() == name
}
