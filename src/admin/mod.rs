mod mutation;
mod site_admin;

pub use mutation::{Mutation, MutationOutcome};
pub use site_admin::SiteAdmin;
