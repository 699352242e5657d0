mod build;
mod clean;
mod content;
mod expertise;
mod init;
mod post;
mod serve;
mod show;
mod watch;

pub use build::handle_build_command;
pub use clean::handle_clean_command;
pub use content::{handle_footer_command, handle_hero_command, handle_site_command, handle_skills_command};
pub use expertise::handle_expertise_command;
pub use init::handle_init_command;
pub use post::handle_post_command;
pub use serve::handle_serve_command;
pub use show::handle_show_command;
pub use watch::handle_watch_command;

use crate::admin::{Mutation, MutationOutcome, SiteAdmin};
use crate::builder::SiteGenerator;
use crate::config::Config;
use crate::document::{DocumentRepository, JsonFileStore};
use crate::utils::error::{BoxResult, FolioError};

/// Wire the document store and generator for an existing document
pub(crate) fn open_admin(config: &Config) -> BoxResult<SiteAdmin> {
    let store = JsonFileStore::new(&config.data_file);
    if !store.exists() {
        return Err(FolioError::Document(format!(
            "No document at {}; run `folio init` first",
            config.data_file.display()
        ))
        .into());
    }

    let generator = SiteGenerator::new(config)?;
    Ok(SiteAdmin::new(Box::new(store), generator, config.slug_collisions))
}

/// Apply one mutation and print what changed
pub(crate) fn apply_mutation(admin: &SiteAdmin, mutation: Mutation) -> BoxResult<()> {
    let outcome = admin.apply(mutation)?;
    println!("{}", describe_outcome(&outcome, admin.generator()));
    Ok(())
}

/// One line summary of an outcome, naming the affected page where there is one
fn describe_outcome(outcome: &MutationOutcome, generator: &SiteGenerator) -> String {
    match outcome {
        MutationOutcome::PostCreated { slug, .. } | MutationOutcome::PostUpdated { slug, .. } => {
            format!("{} -> {}", outcome, generator.post_page_path(slug).display())
        }
        MutationOutcome::PostDeleted(post) => {
            format!("{}; removed {}", outcome, generator.post_page_path(&post.slug).display())
        }
        _ => format!("{}; site regenerated in {}", outcome, generator.config().destination.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn generator() -> SiteGenerator {
        let config = Config {
            destination: PathBuf::from("out"),
            ..Config::default()
        };
        SiteGenerator::new(&config).unwrap()
    }

    #[test]
    fn test_describe_created_post_names_page() {
        let outcome = MutationOutcome::PostCreated { id: 4, slug: "hello".to_string() };
        let line = describe_outcome(&outcome, &generator());
        assert!(line.starts_with("Created post 4 (hello)"));
        assert!(line.ends_with(&PathBuf::from("out/blog/hello.html").display().to_string()));
    }

    #[test]
    fn test_describe_content_update() {
        let line = describe_outcome(&MutationOutcome::Updated, &generator());
        assert_eq!(line, "Updated; site regenerated in out");
    }

    #[test]
    fn test_open_admin_requires_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_file: dir.path().join("missing.json"),
            ..Config::default()
        };
        let err = open_admin(&config).err().unwrap();
        assert!(err.to_string().contains("folio init"));
    }
}
