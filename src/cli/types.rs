use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio content manager and static site generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Custom configuration file; repeat to layer several
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Persisted document (defaults to ./site_data.json)
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Destination directory (defaults to ./public)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Write the default document and generate the site
    Init {
        /// Replace an existing document with the default one
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Regenerate the site from the document
    #[command(alias = "b")]
    Build {
        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
        quiet: bool,
    },

    /// Serve the generated site locally
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT", default_value = "4000")]
        port: u16,

        /// Regenerate when the document changes on disk
        #[arg(short = 'w', long, default_value_t = false)]
        watch: bool,
    },

    /// Regenerate whenever the document changes on disk
    #[command(alias = "w")]
    Watch,

    /// Remove the generated site
    Clean,

    /// Print the current document
    Show {
        /// Print the raw document as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Edit site metadata
    Site {
        #[command(subcommand)]
        action: SiteCommand,
    },

    /// Edit the home page hero
    Hero {
        #[command(subcommand)]
        action: HeroCommand,
    },

    /// Edit the footer
    Footer {
        #[command(subcommand)]
        action: FooterCommand,
    },

    /// Manage expertise cards
    Expertise {
        #[command(subcommand)]
        action: ExpertiseCommand,
    },

    /// Manage the skills list
    Skills {
        #[command(subcommand)]
        action: SkillsCommand,
    },

    /// Manage blog posts
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        action: PostCommand,
    },
}

#[derive(Subcommand)]
pub enum SiteCommand {
    /// Replace site metadata fields; omitted fields are kept
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Social handle, e.g. @someone
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        domain: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum HeroCommand {
    /// Replace hero fields; omitted fields are kept
    Set {
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FooterCommand {
    /// Replace footer fields; omitted fields are kept
    Set {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        tagline: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ExpertiseCommand {
    /// List cards with their positions
    #[command(alias = "ls")]
    List,

    /// Append a card
    Add {
        #[arg(long)]
        icon: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },

    /// Edit the card at INDEX
    Edit {
        index: usize,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete the card at INDEX; later cards move up
    #[command(alias = "rm")]
    Delete { index: usize },
}

#[derive(Subcommand)]
pub enum SkillsCommand {
    /// List skills in display order
    #[command(alias = "ls")]
    List,

    /// Replace the skills list from a comma separated value
    Set {
        /// e.g. "Rust, Go, SQL"
        skills: String,
    },
}

/// Post body given inline or read from a file
#[derive(Args)]
pub struct ContentArgs {
    /// Markdown body
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the Markdown body from FILE
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PostCommand {
    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Create a post dated today
    New {
        #[arg(long)]
        title: String,

        /// Card summary; derived from the body when omitted
        #[arg(long)]
        excerpt: Option<String>,

        #[command(flatten)]
        body: ContentArgs,

        #[arg(long, default_value = "GENERAL")]
        category: String,

        #[arg(long, default_value = "💻")]
        icon: String,

        /// Create the post unpublished
        #[arg(long, default_value_t = false)]
        draft: bool,
    },

    /// Edit post ID; omitted fields are kept
    Edit {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        excerpt: Option<String>,

        #[command(flatten)]
        body: ContentArgs,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        /// Publish the post
        #[arg(long, default_value_t = false, conflicts_with = "unpublish")]
        publish: bool,

        /// Unpublish the post; its page stays on disk
        #[arg(long, default_value_t = false)]
        unpublish: bool,
    },

    /// Delete post ID and its page
    #[command(alias = "rm")]
    Delete { id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "build", "-d", "out", "--data", "x.json"]).unwrap();
        assert_eq!(cli.destination, Some(PathBuf::from("out")));
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Commands::Build { verbose: false, quiet: false }));
    }

    #[test]
    fn test_post_edit_flags() {
        let cli = Cli::try_parse_from(["folio", "post", "edit", "3", "--unpublish"]).unwrap();
        match cli.command {
            Commands::Post { action: PostCommand::Edit { id, publish, unpublish, .. } } => {
                assert_eq!(id, 3);
                assert!(!publish);
                assert!(unpublish);
            }
            _ => panic!("unexpected command"),
        }

        let both = Cli::try_parse_from(["folio", "post", "edit", "3", "--publish", "--unpublish"]);
        assert!(both.is_err());
    }

    #[test]
    fn test_content_sources_conflict() {
        let parsed = Cli::try_parse_from([
            "folio", "post", "new", "--title", "T", "--content", "x", "--content-file", "a.md",
        ]);
        assert!(parsed.is_err());
    }
}
