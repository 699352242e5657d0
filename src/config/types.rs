use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;

/// What happens when a new or renamed post's slug is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugCollisionPolicy {
    /// Append `-2`, `-3`, ... until the slug is free
    Disambiguate,
    /// Keep the colliding slug; the later post's page overwrites the earlier one
    Overwrite,
}

impl Default for SlugCollisionPolicy {
    fn default() -> Self {
        defaults::default_slug_collisions()
    }
}

/// Markdown renderer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Escape `&`, `<` and `>` in post bodies instead of passing raw HTML through
    #[serde(default)]
    pub escape_html: bool,
}

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Persisted document holding all site content
    #[serde(default = "defaults::default_data_file")]
    pub data_file: PathBuf,

    /// Destination directory for the generated site
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Posts subdirectory inside the destination
    #[serde(default = "defaults::default_posts_dir")]
    pub posts_dir: String,

    /// Home page file name
    #[serde(default = "defaults::default_home_page")]
    pub home_page: String,

    /// Blog index file name
    #[serde(default = "defaults::default_blog_page")]
    pub blog_page: String,

    /// Extension of generated post pages
    #[serde(default = "defaults::default_page_extension")]
    pub page_extension: String,

    /// Navigation logo text; derived from the site name when unset
    #[serde(default)]
    pub logo: Option<String>,

    /// Markdown renderer settings
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Slug collision handling
    #[serde(default = "defaults::default_slug_collisions")]
    pub slug_collisions: SlugCollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: defaults::default_data_file(),
            destination: defaults::default_destination(),
            posts_dir: defaults::default_posts_dir(),
            home_page: defaults::default_home_page(),
            blog_page: defaults::default_blog_page(),
            page_extension: defaults::default_page_extension(),
            logo: None,
            markdown: MarkdownConfig::default(),
            slug_collisions: defaults::default_slug_collisions(),
        }
    }
}

impl Config {
    /// Directory that receives one page per published post
    pub fn posts_destination(&self) -> PathBuf {
        self.destination.join(&self.posts_dir)
    }

    /// File name of a post page, e.g. `hello-world.html`
    pub fn post_file_name(&self, slug: &str) -> String {
        format!("{}.{}", slug, self.page_extension)
    }
}
