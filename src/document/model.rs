use serde::{Serialize, Deserialize};

use crate::document::seed;

/// Identifier of a blog post
pub type PostId = u64;

/// The single aggregate holding all site content.
///
/// Field names and nesting match the persisted JSON file exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub site_info: SiteInfo,
    pub hero: Hero,
    /// Older documents predate the footer; they are read with the seed footer
    #[serde(default = "seed::default_footer")]
    pub footer: Footer,
    /// Display order; entries are addressed by position
    pub expertise: Vec<Expertise>,
    /// Display order
    pub skills: Vec<String>,
    /// Storage order; displayed newest first
    pub posts: Vec<Post>,
}

/// Site metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    /// Social handle, usually with a leading `@`
    pub twitter: String,
    pub domain: String,
}

impl SiteInfo {
    /// The social handle without its leading `@`, as used in profile URLs
    pub fn social_handle(&self) -> &str {
        self.twitter.trim().trim_start_matches('@')
    }
}

/// Hero copy at the top of the home page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub tag: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    pub tagline: String,
}

/// One expertise card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Markdown source
    pub content: String,
    pub category: String,
    pub icon: String,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
    /// e.g. `3 min`
    pub read_time: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Post {
    /// Year part of the creation date, or the whole date when it is not `YYYY-...`
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or(&self.date)
    }
}

/// Fields supplied when creating a post; id, slug, date and read time are derived
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub icon: String,
    pub published: bool,
}

/// Partial update of a post; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpertisePatch {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroPatch {
    pub tag: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterPatch {
    pub text: Option<String>,
    pub tagline: Option<String>,
}
