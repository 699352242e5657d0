use crate::cli::commands::open_admin;
use crate::config::Config;
use crate::document::Document;
use crate::utils::error::BoxResult;

/// Handle the show command
pub fn handle_show_command(config: &Config, json: bool) -> BoxResult<()> {
    let document = open_admin(config)?.document()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", summarize(&document));
    }
    Ok(())
}

/// Human readable overview of the document
fn summarize(document: &Document) -> String {
    let info = &document.site_info;
    let published = document.published_posts().count();

    let mut out = String::new();
    out.push_str(&format!("{} | {}\n", info.name, info.title));
    out.push_str(&format!("  {}\n", info.description));
    out.push_str(&format!("  email: {}  social: {}  domain: {}\n", info.email, info.twitter, info.domain));
    out.push_str(&format!("Hero: [{}] {}\n", document.hero.tag, document.hero.title));
    out.push_str(&format!("Expertise: {} card(s)\n", document.expertise.len()));
    out.push_str(&format!("Skills: {}\n", document.skills.join(", ")));
    out.push_str(&format!(
        "Posts: {} ({} published, {} draft)\n",
        document.posts.len(),
        published,
        document.posts.len() - published
    ));
    out.push_str(&format!("Footer: {} / {}\n", document.footer.text, document.footer.tagline));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::seed::default_document;

    #[test]
    fn test_summary_counts() {
        let document = default_document();
        let summary = summarize(&document);
        assert!(summary.starts_with(&document.site_info.name));
        assert!(summary.contains(&format!("Expertise: {} card(s)", document.expertise.len())));
        assert!(summary.contains("Posts: 0 (0 published, 0 draft)"));
    }
}
