mod generator;

pub use generator::SiteGenerator;
