mod composer;
mod context;
mod styles;
mod templates;

pub use composer::PageComposer;
