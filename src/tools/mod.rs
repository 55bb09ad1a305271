pub mod docker;
pub mod menu;
pub mod prune;
pub mod restart;

use crate::cli::StackCommand;
use crate::error::Error;
use crate::runner::{Binary, Exec};

/// A tool knows which CLI calls one invocation makes.
pub trait Tool {
    /// Execute the tool and return what the host should show.
    fn run(&self, exec: &dyn Exec) -> Result<String, Error>;
}

/// Pick the tool for an action invocation.
pub fn select(command: StackCommand) -> Box<dyn Tool> {
    match command {
        StackCommand::RunDocker { args } => {
            Box::new(docker::DockerTool::new(Binary::Docker, normalize_args(&args)))
        }
        StackCommand::RunCompose { args } => {
            Box::new(docker::DockerTool::new(Binary::Compose, normalize_args(&args)))
        }
        StackCommand::Restart { app } => Box::new(restart::RestartTool::new(app)),
        StackCommand::Prune => Box::new(prune::PruneTool),
    }
}

/// The host may pass `scale web=0` as one parameter or as several.
pub fn normalize_args(args: &[String]) -> Vec<String> {
    args.join(" ").split_whitespace().map(String::from).collect()
}
