use std::path::PathBuf;

use crate::config::types::SlugCollisionPolicy;

/// Default persisted document path
pub fn default_data_file() -> PathBuf {
    PathBuf::from("site_data.json")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("public")
}

/// Default posts subdirectory, relative to the destination
pub fn default_posts_dir() -> String {
    "blog".to_string()
}

/// Default home page file name
pub fn default_home_page() -> String {
    "index.html".to_string()
}

/// Default blog index file name
pub fn default_blog_page() -> String {
    "blog.html".to_string()
}

/// Default extension for post pages
pub fn default_page_extension() -> String {
    "html".to_string()
}

/// Slug collisions get a numeric suffix unless configured otherwise
pub fn default_slug_collisions() -> SlugCollisionPolicy {
    SlugCollisionPolicy::Disambiguate
}
