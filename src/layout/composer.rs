use liquid::{Parser, Template};
use log::debug;
use serde::Serialize;

use crate::config::Config;
use crate::document::{Document, Post};
use crate::layout::context::{BlogContext, HomeContext, PostContext};
use crate::layout::templates::{BLOG_TEMPLATE, HOME_TEMPLATE, POST_TEMPLATE};
use crate::utils::error::{BoxResult, FolioError};

/// Renders the document into complete HTML pages.
///
/// Pure string production: the same document and config always give the
/// same bytes. Writing files is the generator's job.
pub struct PageComposer {
    config: Config,
    home: Template,
    blog: Template,
    post: Template,
}

fn parse_template(parser: &Parser, name: &str, source: &str) -> BoxResult<Template> {
    parser.parse(source).map_err(|e| {
        FolioError::Template(format!("Failed to parse {} template: {}", name, e)).into()
    })
}

fn render_template<T: Serialize>(template: &Template, name: &str, context: &T) -> BoxResult<String> {
    let globals = liquid::to_object(context).map_err(|e| {
        FolioError::Template(format!("Failed to build {} context: {}", name, e))
    })?;

    template.render(&globals).map_err(|e| {
        FolioError::Template(format!("Failed to render {}: {}", name, e)).into()
    })
}

impl PageComposer {
    /// Create a composer, parsing all page templates up front
    pub fn new(config: &Config) -> BoxResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| FolioError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        Ok(PageComposer {
            config: config.clone(),
            home: parse_template(&parser, "home", HOME_TEMPLATE)?,
            blog: parse_template(&parser, "blog", BLOG_TEMPLATE)?,
            post: parse_template(&parser, "post", POST_TEMPLATE)?,
        })
    }

    /// Home page: hero, expertise, skills, featured post and contact links
    pub fn render_home(&self, document: &Document) -> BoxResult<String> {
        debug!("Rendering home page");
        render_template(&self.home, "home page", &HomeContext::new(document, &self.config))
    }

    /// Blog index with a card per published post, newest first
    pub fn render_blog_index(&self, document: &Document) -> BoxResult<String> {
        debug!("Rendering blog index");
        render_template(&self.blog, "blog index", &BlogContext::new(document, &self.config))
    }

    /// A single post page around an already rendered markdown fragment
    pub fn render_post(&self, document: &Document, post: &Post, fragment: &str) -> BoxResult<String> {
        debug!("Rendering post page '{}'", post.slug);
        let context = PostContext::new(document, post, fragment, &self.config);
        render_template(&self.post, &format!("post '{}'", post.slug), &context)
    }
}
