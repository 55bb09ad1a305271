use super::Tool;
use crate::error::Error;
use crate::runner::{Binary, Exec};

/// Passes its arguments straight to `docker` or `docker-compose`.
pub struct DockerTool {
    binary: Binary,
    args: Vec<String>,
}

impl DockerTool {
    pub fn new(binary: Binary, args: Vec<String>) -> Self {
        Self { binary, args }
    }
}

impl Tool for DockerTool {
    fn run(&self, exec: &dyn Exec) -> Result<String, Error> {
        let result = exec.run(self.binary, &self.args)?;
        Ok(result.combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunError;
    use crate::runner::fake::FakeExec;

    #[test]
    fn test_returns_output() {
        let exec = FakeExec::new().respond(Binary::Compose, "pull", "Pulling web ... done");
        let tool = DockerTool::new(Binary::Compose, vec!["pull".into(), "web".into()]);
        assert_eq!(tool.run(&exec).unwrap(), "Pulling web ... done");
    }

    #[test]
    fn test_failure_surfaces() {
        let exec = FakeExec::new().fail(Binary::Docker, "rm", 1);
        let tool = DockerTool::new(Binary::Docker, vec!["rm".into(), "nope".into()]);
        let err = tool.run(&exec).unwrap_err();
        assert!(matches!(err, Error::Run(RunError::Exit { code: 1, .. })));
    }

    #[test]
    fn test_spawn_failure_surfaces() {
        let exec = FakeExec::unreachable();
        let tool = DockerTool::new(Binary::Docker, vec!["ps".into()]);
        assert!(matches!(tool.run(&exec), Err(Error::Run(RunError::Spawn { .. }))));
    }
}
