use std::borrow::Cow;

use crate::config::Config;
use crate::markdown::renderer::block::{classify, is_fence, Block, ListKind};
use crate::markdown::renderer::inline::apply_inline;

/// Markdown renderer for the restricted post dialect.
///
/// Rendering is a single pass over the lines of the source. Any input is
/// accepted; there is no error path.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    escape_html: bool,
}

/// Mutable state of one rendering pass
#[derive(Default)]
struct RenderState {
    out: String,
    list: Option<ListKind>,
    /// Buffered lines while inside a fenced code block
    code: Option<String>,
}

impl RenderState {
    fn close_list(&mut self) {
        if let Some(kind) = self.list.take() {
            self.out.push_str(kind.close_tag());
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str) {
        // A different kind does not start a new list; items join the open one
        if self.list.is_none() {
            self.out.push_str(kind.open_tag());
            self.list = Some(kind);
        }
        self.out.push_str("<li>");
        self.out.push_str(text);
        self.out.push_str("</li>");
    }

    fn push_element(&mut self, tag: &str, text: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(text);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn flush_code(&mut self, escape: bool) {
        if let Some(code) = self.code.take() {
            let body = code.trim_end();
            self.out.push_str("<pre><code>");
            self.out.push_str(&escape_if(body, escape));
            self.out.push_str("</code></pre>");
        }
    }
}

fn escape_if(text: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        html_escape::encode_text(text)
    } else {
        Cow::Borrowed(text)
    }
}

impl MarkdownRenderer {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> Self {
        MarkdownRenderer {
            escape_html: config.markdown.escape_html,
        }
    }

    /// Render markdown source to an HTML fragment
    pub fn render(&self, source: &str) -> String {
        let mut state = RenderState::default();

        for raw in source.split('\n') {
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if state.code.is_some() {
                if is_fence(line) {
                    state.flush_code(self.escape_html);
                } else if let Some(code) = state.code.as_mut() {
                    code.push_str(line);
                    code.push('\n');
                }
                continue;
            }

            match classify(line) {
                Block::Fence => {
                    state.close_list();
                    state.code = Some(String::new());
                }
                Block::Heading { level, text } => {
                    state.close_list();
                    let tag = if level == 3 { "h3" } else { "h2" };
                    state.push_element(tag, &self.text(text));
                }
                Block::ListItem { kind, text } => {
                    state.push_list_item(kind, &self.text(text));
                }
                Block::Quote(text) => {
                    state.close_list();
                    state.push_element("blockquote", &self.text(text));
                }
                Block::Paragraph(text) => {
                    state.close_list();
                    state.push_element("p", &apply_inline(&self.text(text)));
                }
                Block::Blank => state.close_list(),
            }
        }

        // An unterminated fence still yields its code
        state.flush_code(self.escape_html);
        state.close_list();
        state.out
    }

    fn text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        escape_if(text, self.escape_html)
    }
}
