use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::builder::types::BuildStats;
use crate::config::Config;
use crate::document::{Document, Post};
use crate::layout::PageComposer;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::BoxResult;
use crate::utils::fs::{create_directory, remove_file_if_exists, write_file};

/// Produces the complete static output tree from a document.
///
/// Every pass re-renders everything: the home page, the blog index and one
/// page per published post. Pages of posts that are merely unpublished are
/// left on disk; only `remove_post_page` deletes a post page.
pub struct SiteGenerator {
    config: Config,
    composer: PageComposer,
    renderer: MarkdownRenderer,
}

impl SiteGenerator {
    pub fn new(config: &Config) -> BoxResult<Self> {
        Ok(SiteGenerator {
            config: config.clone(),
            composer: PageComposer::new(config)?,
            renderer: MarkdownRenderer::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn home_path(&self) -> PathBuf {
        self.config.destination.join(&self.config.home_page)
    }

    pub fn blog_path(&self) -> PathBuf {
        self.config.destination.join(&self.config.blog_page)
    }

    pub fn posts_path(&self) -> PathBuf {
        self.config.posts_destination()
    }

    pub fn post_page_path(&self, slug: &str) -> PathBuf {
        self.posts_path().join(self.config.post_file_name(slug))
    }

    /// Re-derive and overwrite every page.
    ///
    /// All pages are composed before the first write, so a template failure
    /// leaves the output tree untouched. The first failed write aborts the
    /// pass and names the file.
    pub fn regenerate(&self, document: &Document) -> BoxResult<BuildStats> {
        let start_time = Instant::now();
        let mut stats = BuildStats::default();

        create_directory(&self.config.destination)?;
        create_directory(self.posts_path())?;

        let published: Vec<&Post> = document.published_posts().collect();
        let fragments: Vec<String> = published
            .par_iter()
            .map(|post| self.renderer.render(&post.content))
            .collect();

        let mut pages: Vec<(PathBuf, String)> = Vec::with_capacity(published.len() + 2);
        pages.push((self.home_path(), self.composer.render_home(document)?));
        pages.push((self.blog_path(), self.composer.render_blog_index(document)?));

        let mut seen = HashSet::new();
        for (post, fragment) in published.iter().zip(&fragments) {
            if !seen.insert(post.slug.as_str()) {
                warn!("Post {} shares slug '{}' with an earlier post and overwrites its page", post.id, post.slug);
            }
            let html = self.composer.render_post(document, post, fragment)?;
            pages.push((self.post_page_path(&post.slug), html));
        }

        for (index, (path, html)) in pages.iter().enumerate() {
            write_file(path, html)?;
            debug!("Wrote {}", path.display());
            if index < 2 {
                stats.pages_written += 1;
            } else {
                stats.posts_written += 1;
            }
        }

        let retained = self.retained_pages(document);
        for path in &retained {
            debug!("Keeping page of unpublished or unknown post: {}", path.display());
        }
        stats.retained_pages = retained.len();

        stats.duration = start_time.elapsed();
        info!(
            "Generated {} pages ({} posts) in {} in {:.2?}",
            stats.total_written(),
            stats.posts_written,
            self.config.destination.display(),
            stats.duration
        );

        Ok(stats)
    }

    /// Delete the page of an explicitly removed post.
    ///
    /// Returns whether a file was deleted.
    pub fn remove_post_page(&self, slug: &str) -> BoxResult<bool> {
        let path = self.post_page_path(slug);
        let removed = remove_file_if_exists(&path)?;
        if removed {
            info!("Removed {}", path.display());
        }
        Ok(removed)
    }

    /// Post pages on disk that no published post produces
    pub fn retained_pages(&self, document: &Document) -> Vec<PathBuf> {
        let live: HashSet<String> = document
            .published_posts()
            .map(|p| self.config.post_file_name(&p.slug))
            .collect();

        let mut retained: Vec<PathBuf> = WalkDir::new(self.posts_path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_string_lossy();
                name.ends_with(&format!(".{}", self.config.page_extension)) && !live.contains(&*name)
            })
            .map(|e| e.into_path())
            .collect();
        retained.sort();
        retained
    }
}
