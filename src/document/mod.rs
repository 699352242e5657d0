pub mod model;
pub mod ops;
pub mod seed;
pub mod store;

pub use model::*;
pub use ops::parse_skills;
pub use store::{DocumentRepository, JsonFileStore};
