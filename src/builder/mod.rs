pub mod site;
pub mod watcher;
pub mod types;

pub use site::SiteGenerator;
pub use types::BuildStats;
pub use watcher::watch_document;
