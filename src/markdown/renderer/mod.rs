mod block;
mod inline;
mod markdown_renderer;

pub use markdown_renderer::MarkdownRenderer;
