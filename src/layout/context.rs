//! Serializable render contexts handed to the page templates.

use serde::Serialize;

use crate::config::Config;
use crate::document::{Document, Expertise, Footer, Hero, Post, SiteInfo};
use crate::layout::styles::BASE_CSS;

/// A navigation entry
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

/// Relative links from the page being rendered
#[derive(Debug, Serialize)]
pub struct Links {
    pub home: String,
    pub blog: String,
    pub nav: Vec<NavLink>,
}

/// A post summary card on the home page or the blog index
#[derive(Debug, Serialize)]
pub struct PostCard<'a> {
    pub url: String,
    pub title: &'a str,
    pub icon: &'a str,
    pub category: &'a str,
    pub date: &'a str,
    pub read_time: &'a str,
    pub excerpt: &'a str,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a Post, config: &Config) -> Self {
        PostCard {
            url: format!("{}/{}", config.posts_dir, config.post_file_name(&post.slug)),
            title: &post.title,
            icon: &post.icon,
            category: &post.category,
            date: &post.date,
            read_time: &post.read_time,
            excerpt: &post.excerpt,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomeContext<'a> {
    pub css: &'static str,
    pub logo: String,
    pub links: Links,
    pub site: &'a SiteInfo,
    pub social_handle: &'a str,
    pub hero: &'a Hero,
    pub footer: &'a Footer,
    pub expertise: &'a [Expertise],
    pub skills: &'a [String],
    pub featured: Option<PostCard<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BlogContext<'a> {
    pub css: &'static str,
    pub logo: String,
    pub links: Links,
    pub site: &'a SiteInfo,
    pub footer: &'a Footer,
    pub posts: Vec<PostCard<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PostContext<'a> {
    pub css: &'static str,
    pub logo: String,
    pub links: Links,
    pub site: &'a SiteInfo,
    pub post: &'a Post,
    pub year: &'a str,
    /// Rendered markdown body, inserted without escaping
    pub content: &'a str,
}

/// Logo text: the configured one, or the initials of the first and last
/// word of the site name followed by a dot
pub fn logo_text(config: &Config, site: &SiteInfo) -> String {
    if let Some(logo) = &config.logo {
        return logo.clone();
    }

    let words: Vec<&str> = site.name.split_whitespace().collect();
    let initial = |word: &str| word.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    match words.as_slice() {
        [] => "Home".to_string(),
        [only] => format!("{}.", initial(*only)),
        [first, .., last] => format!("{}{}.", initial(*first), initial(*last)),
    }
}

/// Links as seen from a root level page (home or blog index)
pub fn root_links(config: &Config, on_home: bool) -> Links {
    let home = config.home_page.clone();
    let anchor = |name: &str| {
        if on_home { format!("#{}", name) } else { format!("{}#{}", home, name) }
    };

    Links {
        nav: vec![
            NavLink { label: "Home", href: if on_home { "#home".to_string() } else { home.clone() } },
            NavLink { label: "Expertise", href: anchor("expertise") },
            NavLink { label: "Skills", href: anchor("skills") },
            NavLink { label: "Blog", href: config.blog_page.clone() },
            NavLink { label: "Contact", href: anchor("contact") },
        ],
        blog: config.blog_page.clone(),
        home,
    }
}

/// Links as seen from a post page one directory below the root
pub fn post_links(config: &Config) -> Links {
    let home = format!("../{}", config.home_page);
    let blog = format!("../{}", config.blog_page);

    Links {
        nav: vec![
            NavLink { label: "Home", href: home.clone() },
            NavLink { label: "Blog", href: blog.clone() },
            NavLink { label: "Contact", href: format!("{}#contact", home) },
        ],
        home,
        blog,
    }
}

impl<'a> HomeContext<'a> {
    pub fn new(document: &'a Document, config: &Config) -> Self {
        HomeContext {
            css: BASE_CSS,
            logo: logo_text(config, &document.site_info),
            links: root_links(config, true),
            site: &document.site_info,
            social_handle: document.site_info.social_handle(),
            hero: &document.hero,
            footer: &document.footer,
            expertise: &document.expertise,
            skills: &document.skills,
            // First published post in storage order, not the newest
            featured: document.published_posts().next().map(|p| PostCard::new(p, config)),
        }
    }
}

impl<'a> BlogContext<'a> {
    pub fn new(document: &'a Document, config: &Config) -> Self {
        BlogContext {
            css: BASE_CSS,
            logo: logo_text(config, &document.site_info),
            links: root_links(config, false),
            site: &document.site_info,
            footer: &document.footer,
            posts: document
                .posts_by_date()
                .into_iter()
                .filter(|p| p.published)
                .map(|p| PostCard::new(p, config))
                .collect(),
        }
    }
}

impl<'a> PostContext<'a> {
    pub fn new(document: &'a Document, post: &'a Post, content: &'a str, config: &Config) -> Self {
        PostContext {
            css: BASE_CSS,
            logo: logo_text(config, &document.site_info),
            links: post_links(config),
            site: &document.site_info,
            post,
            year: post.year(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str) -> SiteInfo {
        SiteInfo { name: name.to_string(), ..SiteInfo::default() }
    }

    #[test]
    fn test_logo_from_initials() {
        let config = Config::default();
        assert_eq!(logo_text(&config, &site("Ada King Lovelace")), "AL.");
        assert_eq!(logo_text(&config, &site("ada")), "A.");
        assert_eq!(logo_text(&config, &site("  ")), "Home");
    }

    #[test]
    fn test_configured_logo_wins() {
        let config = Config { logo: Some("~/me".to_string()), ..Config::default() };
        assert_eq!(logo_text(&config, &site("Ada Lovelace")), "~/me");
    }

    #[test]
    fn test_links() {
        let config = Config::default();
        let from_blog = root_links(&config, false);
        assert_eq!(from_blog.nav[1].href, "index.html#expertise");
        let from_post = post_links(&config);
        assert_eq!(from_post.home, "../index.html");
        assert_eq!(from_post.blog, "../blog.html");
    }
}
