mod text;

pub use text::{extract_summary, read_time};
