use chrono::NaiveDate;
use log::{debug, warn};

use crate::config::SlugCollisionPolicy;
use crate::document::model::{
    Document, Expertise, ExpertisePatch, FooterPatch, HeroPatch, Post, PostDraft, PostId,
    PostPatch, SiteInfoPatch,
};
use crate::markdown::read_time;
use crate::utils::error::{BoxResult, FolioError};
use crate::utils::slug::{disambiguate, slugify};

fn patch_field(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Split a comma separated skills list, dropping blank entries
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Document {
    pub fn set_site_info(&mut self, patch: SiteInfoPatch) {
        let info = &mut self.site_info;
        patch_field(&mut info.name, patch.name);
        patch_field(&mut info.title, patch.title);
        patch_field(&mut info.description, patch.description);
        patch_field(&mut info.email, patch.email);
        patch_field(&mut info.twitter, patch.twitter);
        patch_field(&mut info.domain, patch.domain);
    }

    pub fn set_hero(&mut self, patch: HeroPatch) {
        patch_field(&mut self.hero.tag, patch.tag);
        patch_field(&mut self.hero.title, patch.title);
        patch_field(&mut self.hero.description, patch.description);
    }

    pub fn set_footer(&mut self, patch: FooterPatch) {
        patch_field(&mut self.footer.text, patch.text);
        patch_field(&mut self.footer.tagline, patch.tagline);
    }

    /// Append an expertise card, returning its position
    pub fn add_expertise(&mut self, entry: Expertise) -> usize {
        self.expertise.push(entry);
        self.expertise.len() - 1
    }

    pub fn edit_expertise(&mut self, index: usize, patch: ExpertisePatch) -> BoxResult<()> {
        let entry = self.expertise.get_mut(index).ok_or_else(|| expertise_not_found(index))?;
        patch_field(&mut entry.icon, patch.icon);
        patch_field(&mut entry.title, patch.title);
        patch_field(&mut entry.description, patch.description);
        Ok(())
    }

    /// Remove the card at `index`; later cards move up one position
    pub fn remove_expertise(&mut self, index: usize) -> BoxResult<Expertise> {
        if index >= self.expertise.len() {
            return Err(expertise_not_found(index).into());
        }
        Ok(self.expertise.remove(index))
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.skills = skills;
    }

    /// One more than the largest id in use, or 1 for an empty blog
    pub fn next_post_id(&self) -> PostId {
        self.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Published posts in storage order
    pub fn published_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.published)
    }

    /// All posts, newest first; posts sharing a date keep storage order
    pub fn posts_by_date(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Create a post dated `date` and return it
    pub fn add_post(&mut self, draft: PostDraft, date: NaiveDate, policy: SlugCollisionPolicy) -> &Post {
        let id = self.next_post_id();
        let slug = self.slug_for(&draft.title, id, policy);

        debug!("Creating post {} with slug '{}'", id, slug);
        self.posts.push(Post {
            id,
            slug,
            read_time: read_time(&draft.content),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            icon: draft.icon,
            date: date.format("%Y-%m-%d").to_string(),
            published: draft.published,
        });

        &self.posts[self.posts.len() - 1]
    }

    /// Apply `patch` to post `id`. The slug follows the title and the read
    /// time follows the content; the creation date never changes.
    pub fn edit_post(&mut self, id: PostId, patch: PostPatch, policy: SlugCollisionPolicy) -> BoxResult<&Post> {
        let index = self.post_index(id)?;

        let slug = match &patch.title {
            Some(title) if *title != self.posts[index].title => Some(self.slug_for(title, id, policy)),
            _ => None,
        };

        let post = &mut self.posts[index];
        patch_field(&mut post.title, patch.title);
        patch_field(&mut post.excerpt, patch.excerpt);
        patch_field(&mut post.content, patch.content);
        patch_field(&mut post.category, patch.category);
        patch_field(&mut post.icon, patch.icon);
        patch_field(&mut post.slug, slug);
        if let Some(published) = patch.published {
            post.published = published;
        }
        post.read_time = read_time(&post.content);

        Ok(&self.posts[index])
    }

    pub fn remove_post(&mut self, id: PostId) -> BoxResult<Post> {
        let index = self.post_index(id)?;
        Ok(self.posts.remove(index))
    }

    fn post_index(&self, id: PostId) -> BoxResult<usize> {
        self.posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| FolioError::NotFound(format!("post {}", id)).into())
    }

    /// Slug for post `id` titled `title`, honoring the collision policy
    fn slug_for(&self, title: &str, id: PostId, policy: SlugCollisionPolicy) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base = format!("post-{}", id);
        }

        let taken = |candidate: &str| {
            self.posts.iter().any(|p| p.id != id && p.slug == candidate)
        };

        match policy {
            SlugCollisionPolicy::Disambiguate => disambiguate(&base, taken),
            SlugCollisionPolicy::Overwrite => {
                if taken(&base) {
                    warn!("Slug '{}' is shared with another post; its page will be overwritten", base);
                }
                base
            }
        }
    }
}

fn expertise_not_found(index: usize) -> FolioError {
    FolioError::NotFound(format!("expertise entry at position {}", index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::seed::default_document;
    use crate::utils::error::as_folio_error;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: content.to_string(),
            category: "SECURITY".to_string(),
            icon: "🔐".to_string(),
            published: true,
        }
    }

    fn empty_document() -> Document {
        let mut document = default_document();
        document.expertise.clear();
        document
    }

    fn titles(document: &Document) -> Vec<&str> {
        document.expertise.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_remove_expertise_shifts_later_entries() {
        let mut document = empty_document();
        for title in ["a", "b", "c", "d"] {
            document.add_expertise(Expertise { title: title.into(), ..Expertise::default() });
        }

        let removed = document.remove_expertise(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(titles(&document), vec!["a", "c", "d"]);
        // Position 1 now addresses what used to be position 2
        assert_eq!(document.expertise[1].title, "c");
    }

    #[test]
    fn test_expertise_misses_are_not_found() {
        let mut document = empty_document();
        let err = document.remove_expertise(0).unwrap_err();
        assert!(as_folio_error(err.as_ref()).unwrap().is_not_found());

        let err = document.edit_expertise(3, ExpertisePatch::default()).unwrap_err();
        assert!(as_folio_error(err.as_ref()).unwrap().is_not_found());
    }

    #[test]
    fn test_edit_expertise_patches_fields() {
        let mut document = empty_document();
        let index = document.add_expertise(Expertise {
            icon: "🔒".into(),
            title: "Old".into(),
            description: "Desc".into(),
        });
        document.edit_expertise(index, ExpertisePatch {
            title: Some("New".into()),
            ..ExpertisePatch::default()
        }).unwrap();

        assert_eq!(document.expertise[index].title, "New");
        assert_eq!(document.expertise[index].icon, "🔒");
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(parse_skills(" Rust, Go ,, ,Bash "), vec!["Rust", "Go", "Bash"]);
        assert!(parse_skills("").is_empty());
    }

    #[test]
    fn test_site_info_patch_keeps_domain() {
        let mut document = default_document();
        let domain = document.site_info.domain.clone();
        document.set_site_info(SiteInfoPatch {
            name: Some("New Name".into()),
            ..SiteInfoPatch::default()
        });
        assert_eq!(document.site_info.name, "New Name");
        assert_eq!(document.site_info.domain, domain);
    }

    #[test]
    fn test_post_ids_follow_max_plus_one() {
        let mut document = empty_document();
        assert_eq!(document.next_post_id(), 1);

        document.add_post(draft("One", ""), date("2024-01-01"), SlugCollisionPolicy::Disambiguate);
        document.add_post(draft("Two", ""), date("2024-01-02"), SlugCollisionPolicy::Disambiguate);
        document.add_post(draft("Three", ""), date("2024-01-03"), SlugCollisionPolicy::Disambiguate);
        document.remove_post(2).unwrap();
        assert_eq!(document.next_post_id(), 4);

        document.remove_post(3).unwrap();
        assert_eq!(document.next_post_id(), 2);
    }

    #[test]
    fn test_add_post_derives_fields() {
        let mut document = empty_document();
        let words = vec!["word"; 400].join(" ");
        let post = document.add_post(draft("Hello, World!", &words), date("2024-03-05"), SlugCollisionPolicy::Disambiguate);

        assert_eq!(post.id, 1);
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.date, "2024-03-05");
        assert_eq!(post.read_time, "2 min");
        assert!(post.published);
    }

    #[test]
    fn test_slug_collisions_disambiguate() {
        let mut document = empty_document();
        let policy = SlugCollisionPolicy::Disambiguate;
        document.add_post(draft("Intro", ""), date("2024-01-01"), policy);
        document.add_post(draft("intro!", ""), date("2024-01-02"), policy);
        document.add_post(draft("INTRO", ""), date("2024-01-03"), policy);

        let slugs: Vec<_> = document.posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["intro", "intro-2", "intro-3"]);
    }

    #[test]
    fn test_slug_collisions_overwrite() {
        let mut document = empty_document();
        let policy = SlugCollisionPolicy::Overwrite;
        document.add_post(draft("Intro", ""), date("2024-01-01"), policy);
        document.add_post(draft("intro!", ""), date("2024-01-02"), policy);

        assert!(document.posts.iter().all(|p| p.slug == "intro"));
    }

    #[test]
    fn test_empty_slug_falls_back_to_id() {
        let mut document = empty_document();
        let post = document.add_post(draft("!!!", ""), date("2024-01-01"), SlugCollisionPolicy::Disambiguate);
        assert_eq!(post.slug, "post-1");
    }

    #[test]
    fn test_edit_post_keeps_date_and_updates_derived_fields() {
        let mut document = empty_document();
        let policy = SlugCollisionPolicy::Disambiguate;
        document.add_post(draft("First", "short"), date("2024-01-01"), policy);

        let words = vec!["w"; 250].join(" ");
        let post = document.edit_post(1, PostPatch {
            title: Some("Renamed Post".into()),
            content: Some(words),
            published: Some(false),
            ..PostPatch::default()
        }, policy).unwrap();

        assert_eq!(post.slug, "renamed-post");
        assert_eq!(post.read_time, "1 min");
        assert_eq!(post.date, "2024-01-01");
        assert!(!post.published);
    }

    #[test]
    fn test_edit_keeps_own_slug() {
        let mut document = empty_document();
        let policy = SlugCollisionPolicy::Disambiguate;
        document.add_post(draft("Same", ""), date("2024-01-01"), policy);
        let post = document.edit_post(1, PostPatch {
            title: Some("Same!".into()),
            ..PostPatch::default()
        }, policy).unwrap();
        assert_eq!(post.slug, "same");
    }

    #[test]
    fn test_post_misses_are_not_found() {
        let mut document = empty_document();
        let err = document.remove_post(9).unwrap_err();
        assert!(as_folio_error(err.as_ref()).unwrap().is_not_found());
        let err = document.edit_post(9, PostPatch::default(), SlugCollisionPolicy::Overwrite).unwrap_err();
        assert!(as_folio_error(err.as_ref()).unwrap().is_not_found());
    }

    #[test]
    fn test_posts_by_date_is_stable() {
        let mut document = empty_document();
        let policy = SlugCollisionPolicy::Disambiguate;
        document.add_post(draft("a", ""), date("2024-01-01"), policy);
        document.add_post(draft("b", ""), date("2024-02-01"), policy);
        document.add_post(draft("c", ""), date("2024-01-01"), policy);

        let order: Vec<_> = document.posts_by_date().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
