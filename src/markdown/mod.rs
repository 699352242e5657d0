pub mod renderer;
pub mod utils;

pub use renderer::MarkdownRenderer;
pub use utils::{extract_summary, read_time};
