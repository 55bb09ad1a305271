use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::menu::Format;

#[derive(Parser, Debug)]
#[command(
    name = "docker-bar",
    version,
    about = "Menu-bar plugin for a docker-compose stack. Without a subcommand it prints the menu."
)]
pub struct Cli {
    /// Config file to use on top of the global and plugin-local ones
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Menu output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Why argv was not understood, when [`decode`] fell back to the menu.
    #[arg(skip)]
    pub rejected: Option<ErrorKind>,
}

impl Cli {
    /// Render mode with defaults.
    fn fallback(kind: ErrorKind) -> Self {
        Self {
            config: None,
            format: Format::Text,
            verbose: 0,
            command: None,
            rejected: Some(kind),
        }
    }
}

/// Parse argv. Anything clap rejects renders the menu; only help and version
/// come back as errors.
pub fn decode<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Err(err),
            kind => Ok(Cli::fallback(kind)),
        },
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    #[command(flatten)]
    Stack(StackCommand),

    /// Show config locations and the resolved configuration
    Info,

    /// Generate a default config file
    Init {
        /// Write ~/.config/docker-bar/config.toml instead of .docker-bar.toml next to the plugin
        #[arg(long)]
        global: bool,
    },

    /// Anything else renders the menu
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Actions the menu items re-invoke the plugin with.
///
/// Everything after `docker` / `docker-compose` belongs to that CLI, `--help` included.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum StackCommand {
    /// Run docker with the given arguments
    #[command(name = "docker", disable_help_flag = true)]
    RunDocker {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run docker-compose with the given arguments
    #[command(name = "docker-compose", disable_help_flag = true)]
    RunCompose {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Scale an app down to 0 and back up to 1
    Restart {
        /// App (compose service) name
        app: String,
    },

    /// Prune stopped containers, unused volumes and dangling images
    Prune,
}
