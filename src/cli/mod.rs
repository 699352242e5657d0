pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::error::Error;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::utils::error::{as_folio_error, BoxResult};
use types::{Cli, Commands};

/// Run the command-line interface
pub async fn run() {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(&cli).await {
        let code = exit_code(e.as_ref());
        if code == EXIT_NOT_FOUND {
            error!("{} (list valid targets with `folio post list` or `folio expertise list`)", e);
        } else {
            error!("{}", e);
        }
        std::process::exit(code);
    }
}

/// Exit status for a missing post id or expertise index
const EXIT_NOT_FOUND: i32 = 2;

fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    match as_folio_error(err) {
        Some(folio_err) if folio_err.is_not_found() => EXIT_NOT_FOUND,
        _ => 1,
    }
}

async fn dispatch(cli: &Cli) -> BoxResult<()> {
    let config = resolve_config(cli)?;

    match &cli.command {
        Commands::Init { force } => commands::handle_init_command(&config, *force),
        Commands::Build { verbose, quiet } => commands::handle_build_command(&config, *verbose, *quiet),
        Commands::Serve { host, port, watch } => {
            commands::handle_serve_command(&config, host, *port, *watch).await
        }
        Commands::Watch => commands::handle_watch_command(&config),
        Commands::Clean => commands::handle_clean_command(&config),
        Commands::Show { json } => commands::handle_show_command(&config, *json),
        Commands::Site { action } => commands::handle_site_command(&config, action),
        Commands::Hero { action } => commands::handle_hero_command(&config, action),
        Commands::Footer { action } => commands::handle_footer_command(&config, action),
        Commands::Expertise { action } => commands::handle_expertise_command(&config, action),
        Commands::Skills { action } => commands::handle_skills_command(&config, action),
        Commands::Post { action } => commands::handle_post_command(&config, action),
    }
}

/// Load configuration files, then apply command line overrides
fn resolve_config(cli: &Cli) -> BoxResult<Config> {
    let mut config = config::load_config(PathBuf::from("."), cli.config.clone())?;

    if let Some(data) = &cli.data {
        config.data_file = data.clone();
    }
    if let Some(destination) = &cli.destination {
        config.destination = destination.clone();
    }

    Ok(config)
}
