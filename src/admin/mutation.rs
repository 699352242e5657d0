use std::fmt;

use crate::document::{
    Expertise, ExpertisePatch, FooterPatch, HeroPatch, Post, PostDraft, PostId, PostPatch,
    SiteInfoPatch,
};

/// A single change to the site document
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetSiteInfo(SiteInfoPatch),
    SetHero(HeroPatch),
    SetFooter(FooterPatch),
    AddExpertise(Expertise),
    EditExpertise { index: usize, patch: ExpertisePatch },
    DeleteExpertise { index: usize },
    SetSkills(Vec<String>),
    AddPost(PostDraft),
    EditPost { id: PostId, patch: PostPatch },
    DeletePost { id: PostId },
}

/// What an applied mutation produced
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Updated,
    ExpertiseAdded(usize),
    ExpertiseRemoved(Expertise),
    PostCreated { id: PostId, slug: String },
    PostUpdated { id: PostId, slug: String },
    PostDeleted(Post),
}

impl fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationOutcome::Updated => write!(f, "Updated"),
            MutationOutcome::ExpertiseAdded(index) => write!(f, "Added expertise #{}", index),
            MutationOutcome::ExpertiseRemoved(entry) => write!(f, "Removed expertise '{}'", entry.title),
            MutationOutcome::PostCreated { id, slug } => write!(f, "Created post {} ({})", id, slug),
            MutationOutcome::PostUpdated { id, slug } => write!(f, "Updated post {} ({})", id, slug),
            MutationOutcome::PostDeleted(post) => write!(f, "Deleted post {} ({})", post.id, post.slug),
        }
    }
}
