use std::fs;

use crate::admin::Mutation;
use crate::cli::commands::{apply_mutation, open_admin};
use crate::cli::types::{ContentArgs, PostCommand};
use crate::config::Config;
use crate::document::{Document, PostDraft, PostPatch};
use crate::markdown::extract_summary;
use crate::utils::error::{BoxResult, FolioError};

/// Length of an excerpt derived from the post body
const EXCERPT_CHARS: usize = 160;

/// Handle the post subcommands
pub fn handle_post_command(config: &Config, action: &PostCommand) -> BoxResult<()> {
    let admin = open_admin(config)?;

    let mutation = match action {
        PostCommand::List => {
            print!("{}", list_posts(&admin.document()?));
            return Ok(());
        }
        PostCommand::New { title, excerpt, body, category, icon, draft } => {
            let content = read_body(body)?.unwrap_or_default();
            let excerpt = excerpt.clone().unwrap_or_else(|| extract_summary(&content, EXCERPT_CHARS));
            Mutation::AddPost(PostDraft {
                title: title.clone(),
                excerpt,
                content,
                category: category.clone(),
                icon: icon.clone(),
                published: !draft,
            })
        }
        PostCommand::Edit { id, title, excerpt, body, category, icon, publish, unpublish } => {
            Mutation::EditPost {
                id: *id,
                patch: PostPatch {
                    title: title.clone(),
                    excerpt: excerpt.clone(),
                    content: read_body(body)?,
                    category: category.clone(),
                    icon: icon.clone(),
                    published: published_flag(*publish, *unpublish),
                },
            }
        }
        PostCommand::Delete { id } => Mutation::DeletePost { id: *id },
    };

    apply_mutation(&admin, mutation)
}

/// Post body from `--content` or `--content-file`, if either was given
fn read_body(args: &ContentArgs) -> BoxResult<Option<String>> {
    if let Some(path) = &args.content_file {
        let content = fs::read_to_string(path).map_err(|e| FolioError::Generic(format!(
            "Failed to read content file {}: {}", path.display(), e
        )))?;
        return Ok(Some(content));
    }
    Ok(args.content.clone())
}

fn published_flag(publish: bool, unpublish: bool) -> Option<bool> {
    match (publish, unpublish) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// One line per post, newest first
fn list_posts(document: &Document) -> String {
    document
        .posts_by_date()
        .into_iter()
        .map(|post| {
            format!(
                "{:>4}  {}  {:<9}  {}  ({})\n",
                post.id,
                post.date,
                if post.published { "published" } else { "draft" },
                post.title,
                post.slug
            )
        })
        .collect()
}
