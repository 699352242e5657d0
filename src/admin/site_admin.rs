use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::admin::mutation::{Mutation, MutationOutcome};
use crate::builder::{BuildStats, SiteGenerator};
use crate::config::SlugCollisionPolicy;
use crate::document::{Document, DocumentRepository};
use crate::utils::error::BoxResult;

/// The only writer of the site document.
///
/// Every mutation runs load, mutate, save, stale page removal and a full
/// regeneration while holding one lock, so concurrent callers are applied
/// one after another and never see each other's half-written state.
pub struct SiteAdmin {
    repository: Box<dyn DocumentRepository>,
    generator: SiteGenerator,
    policy: SlugCollisionPolicy,
    lock: Mutex<()>,
}

impl SiteAdmin {
    pub fn new(
        repository: Box<dyn DocumentRepository>,
        generator: SiteGenerator,
        policy: SlugCollisionPolicy,
    ) -> Self {
        SiteAdmin {
            repository,
            generator,
            policy,
            lock: Mutex::new(()),
        }
    }

    pub fn generator(&self) -> &SiteGenerator {
        &self.generator
    }

    /// Apply a mutation; new posts are dated today
    pub fn apply(&self, mutation: Mutation) -> BoxResult<MutationOutcome> {
        self.apply_on(mutation, Local::now().date_naive())
    }

    /// Apply a mutation, dating new posts `today`.
    ///
    /// A failed mutation leaves the persisted document untouched. Once the
    /// document is saved, a failed regeneration is still reported.
    pub fn apply_on(&self, mutation: Mutation, today: NaiveDate) -> BoxResult<MutationOutcome> {
        let _guard = self.acquire();

        let mut document = self.repository.load()?;
        let (outcome, stale_slug) = self.mutate(&mut document, mutation, today)?;
        self.repository.save(&document)?;

        if let Some(slug) = stale_slug {
            self.generator.remove_post_page(&slug)?;
        }
        self.generator.regenerate(&document)?;

        info!("{}", outcome);
        Ok(outcome)
    }

    /// Current document
    pub fn document(&self) -> BoxResult<Document> {
        let _guard = self.acquire();
        self.repository.load()
    }

    /// Regenerate the site from the persisted document
    pub fn regenerate(&self) -> BoxResult<BuildStats> {
        let _guard = self.acquire();
        let document = self.repository.load()?;
        self.generator.regenerate(&document)
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply `mutation` in memory. Also returns the slug whose page must be
    /// deleted: the slug of a deleted post, or the previous slug of a renamed one.
    fn mutate(
        &self,
        document: &mut Document,
        mutation: Mutation,
        today: NaiveDate,
    ) -> BoxResult<(MutationOutcome, Option<String>)> {
        debug!("Applying {:?}", mutation);

        let result = match mutation {
            Mutation::SetSiteInfo(patch) => {
                document.set_site_info(patch);
                (MutationOutcome::Updated, None)
            }
            Mutation::SetHero(patch) => {
                document.set_hero(patch);
                (MutationOutcome::Updated, None)
            }
            Mutation::SetFooter(patch) => {
                document.set_footer(patch);
                (MutationOutcome::Updated, None)
            }
            Mutation::AddExpertise(entry) => {
                (MutationOutcome::ExpertiseAdded(document.add_expertise(entry)), None)
            }
            Mutation::EditExpertise { index, patch } => {
                document.edit_expertise(index, patch)?;
                (MutationOutcome::Updated, None)
            }
            Mutation::DeleteExpertise { index } => {
                (MutationOutcome::ExpertiseRemoved(document.remove_expertise(index)?), None)
            }
            Mutation::SetSkills(skills) => {
                document.set_skills(skills);
                (MutationOutcome::Updated, None)
            }
            Mutation::AddPost(draft) => {
                let post = document.add_post(draft, today, self.policy);
                (MutationOutcome::PostCreated { id: post.id, slug: post.slug.clone() }, None)
            }
            Mutation::EditPost { id, patch } => {
                let previous = document.post(id).map(|p| p.slug.clone());
                let post = document.edit_post(id, patch, self.policy)?;
                let stale = previous.filter(|old| *old != post.slug);
                (MutationOutcome::PostUpdated { id: post.id, slug: post.slug.clone() }, stale)
            }
            Mutation::DeletePost { id } => {
                let post = document.remove_post(id)?;
                let slug = post.slug.clone();
                (MutationOutcome::PostDeleted(post), Some(slug))
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use std::thread;

    use crate::config::Config;
    use crate::document::{Expertise, JsonFileStore, PostDraft, PostPatch};
    use crate::utils::error::{as_folio_error, FolioError};

    fn admin_in(dir: &Path) -> SiteAdmin {
        let config = Config {
            data_file: dir.join("site_data.json"),
            destination: dir.join("public"),
            ..Config::default()
        };
        let store = JsonFileStore::new(&config.data_file);
        store.initialize().unwrap();
        let generator = SiteGenerator::new(&config).unwrap();
        SiteAdmin::new(Box::new(store), generator, config.slug_collisions)
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            excerpt: "Short".to_string(),
            content: "Body text".to_string(),
            category: "NOTES".to_string(),
            icon: "📝".to_string(),
            published: true,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_add_post_persists_and_generates() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());

        let outcome = admin.apply_on(Mutation::AddPost(draft("Hello World")), date()).unwrap();
        assert_eq!(outcome, MutationOutcome::PostCreated { id: 1, slug: "hello-world".to_string() });

        let document = admin.document().unwrap();
        assert_eq!(document.posts.len(), 1);
        assert_eq!(document.posts[0].date, "2024-03-09");
        assert!(admin.generator().post_page_path("hello-world").is_file());

        let index = fs::read_to_string(admin.generator().blog_path()).unwrap();
        assert!(index.contains("Hello World"));
    }

    #[test]
    fn test_unpublish_keeps_page_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());
        admin.apply_on(Mutation::AddPost(draft("Hello World")), date()).unwrap();

        let patch = PostPatch { published: Some(false), ..PostPatch::default() };
        admin.apply_on(Mutation::EditPost { id: 1, patch }, date()).unwrap();

        assert!(admin.generator().post_page_path("hello-world").is_file());
        let index = fs::read_to_string(admin.generator().blog_path()).unwrap();
        assert!(!index.contains("Hello World"));
    }

    #[test]
    fn test_delete_post_removes_page() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());
        admin.apply_on(Mutation::AddPost(draft("Hello World")), date()).unwrap();

        let outcome = admin.apply_on(Mutation::DeletePost { id: 1 }, date()).unwrap();
        match outcome {
            MutationOutcome::PostDeleted(post) => assert_eq!(post.slug, "hello-world"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!admin.generator().post_page_path("hello-world").exists());
        assert!(admin.document().unwrap().posts.is_empty());
    }

    #[test]
    fn test_rename_removes_old_page() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());
        admin.apply_on(Mutation::AddPost(draft("Hello World")), date()).unwrap();

        let patch = PostPatch { title: Some("Goodbye World".to_string()), ..PostPatch::default() };
        let outcome = admin.apply_on(Mutation::EditPost { id: 1, patch }, date()).unwrap();

        assert_eq!(outcome, MutationOutcome::PostUpdated { id: 1, slug: "goodbye-world".to_string() });
        assert!(!admin.generator().post_page_path("hello-world").exists());
        assert!(admin.generator().post_page_path("goodbye-world").is_file());
    }

    #[test]
    fn test_missing_target_leaves_document_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());
        let before = admin.document().unwrap();

        let err = admin.apply_on(Mutation::DeletePost { id: 42 }, date()).unwrap_err();
        assert!(matches!(as_folio_error(err.as_ref()), Some(FolioError::NotFound(_))));

        let err = admin.apply_on(Mutation::DeleteExpertise { index: 99 }, date()).unwrap_err();
        assert!(as_folio_error(err.as_ref()).map_or(false, FolioError::is_not_found));

        assert_eq!(admin.document().unwrap(), before);
    }

    #[test]
    fn test_expertise_positions() {
        let dir = tempfile::tempdir().unwrap();
        let admin = admin_in(dir.path());
        let count = admin.document().unwrap().expertise.len();

        let entry = Expertise {
            icon: "🧪".to_string(),
            title: "Testing".to_string(),
            description: "Lots of it".to_string(),
        };
        let outcome = admin.apply_on(Mutation::AddExpertise(entry.clone()), date()).unwrap();
        assert_eq!(outcome, MutationOutcome::ExpertiseAdded(count));

        let outcome = admin.apply_on(Mutation::DeleteExpertise { index: count }, date()).unwrap();
        assert_eq!(outcome, MutationOutcome::ExpertiseRemoved(entry));
        assert_eq!(admin.document().unwrap().expertise.len(), count);
    }

    #[test]
    fn test_concurrent_posts_get_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let admin = Arc::new(admin_in(dir.path()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let admin = Arc::clone(&admin);
                thread::spawn(move || {
                    admin
                        .apply_on(Mutation::AddPost(draft(&format!("Post {}", i))), date())
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let document = admin.document().unwrap();
        let mut ids: Vec<u64> = document.posts.iter().map(|p| p.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
