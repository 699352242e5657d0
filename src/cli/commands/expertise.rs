use crate::admin::Mutation;
use crate::cli::commands::{apply_mutation, open_admin};
use crate::cli::types::ExpertiseCommand;
use crate::config::Config;
use crate::document::{Expertise, ExpertisePatch};
use crate::utils::error::BoxResult;

/// Handle the expertise subcommands
pub fn handle_expertise_command(config: &Config, action: &ExpertiseCommand) -> BoxResult<()> {
    let admin = open_admin(config)?;

    let mutation = match action {
        ExpertiseCommand::List => {
            for (index, entry) in admin.document()?.expertise.iter().enumerate() {
                println!("{:>3}  {} {}", index, entry.icon, entry.title);
            }
            return Ok(());
        }
        ExpertiseCommand::Add { icon, title, description } => Mutation::AddExpertise(Expertise {
            icon: icon.clone(),
            title: title.clone(),
            description: description.clone(),
        }),
        ExpertiseCommand::Edit { index, icon, title, description } => Mutation::EditExpertise {
            index: *index,
            patch: ExpertisePatch {
                icon: icon.clone(),
                title: title.clone(),
                description: description.clone(),
            },
        },
        ExpertiseCommand::Delete { index } => Mutation::DeleteExpertise { index: *index },
    };

    apply_mutation(&admin, mutation)
}
