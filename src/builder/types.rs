use std::time::Duration;

/// Statistics of one regeneration pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Home page and blog index
    pub pages_written: usize,
    /// Published post pages
    pub posts_written: usize,
    /// Post pages left in place that belong to no published post
    pub retained_pages: usize,
    pub duration: Duration,
}

impl BuildStats {
    pub fn total_written(&self) -> usize {
        self.pages_written + self.posts_written
    }
}
