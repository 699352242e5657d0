use crate::admin::Mutation;
use crate::cli::commands::{apply_mutation, open_admin};
use crate::cli::types::{FooterCommand, HeroCommand, SiteCommand, SkillsCommand};
use crate::config::Config;
use crate::document::{parse_skills, FooterPatch, HeroPatch, SiteInfoPatch};
use crate::utils::error::BoxResult;

/// Handle `site set`
pub fn handle_site_command(config: &Config, action: &SiteCommand) -> BoxResult<()> {
    let SiteCommand::Set { name, title, description, email, twitter, domain } = action;
    let patch = SiteInfoPatch {
        name: name.clone(),
        title: title.clone(),
        description: description.clone(),
        email: email.clone(),
        twitter: twitter.clone(),
        domain: domain.clone(),
    };
    apply_mutation(&open_admin(config)?, Mutation::SetSiteInfo(patch))?;
    Ok(())
}

/// Handle `hero set`
pub fn handle_hero_command(config: &Config, action: &HeroCommand) -> BoxResult<()> {
    let HeroCommand::Set { tag, title, description } = action;
    let patch = HeroPatch {
        tag: tag.clone(),
        title: title.clone(),
        description: description.clone(),
    };
    apply_mutation(&open_admin(config)?, Mutation::SetHero(patch))?;
    Ok(())
}

/// Handle `footer set`
pub fn handle_footer_command(config: &Config, action: &FooterCommand) -> BoxResult<()> {
    let FooterCommand::Set { text, tagline } = action;
    let patch = FooterPatch {
        text: text.clone(),
        tagline: tagline.clone(),
    };
    apply_mutation(&open_admin(config)?, Mutation::SetFooter(patch))?;
    Ok(())
}

/// Handle `skills list` and `skills set`
pub fn handle_skills_command(config: &Config, action: &SkillsCommand) -> BoxResult<()> {
    let admin = open_admin(config)?;
    match action {
        SkillsCommand::List => {
            for skill in admin.document()?.skills {
                println!("{}", skill);
            }
        }
        SkillsCommand::Set { skills } => {
            apply_mutation(&admin, Mutation::SetSkills(parse_skills(skills)))?;
        }
    }
    Ok(())
}
