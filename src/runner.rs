use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use tracing::debug;

use crate::config::Settings;
use crate::error::RunError;

/// The two CLIs the plugin drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Docker,
    Compose,
}

impl Binary {
    pub fn name(self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Compose => "docker-compose",
        }
    }
}

/// Result of executing a command: raw output + metadata.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub elapsed_ms: u128,
}

impl RunResult {
    /// Merge stdout + stderr into a single string.
    pub fn combined(&self) -> String {
        let mut buf = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !buf.is_empty() {
                buf.push('\n');
            }
            buf.push_str(&self.stderr);
        }
        buf
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Seam between the tools and the processes they spawn.
pub trait Exec: Sync {
    /// Spawn `binary` with `args`, wait for it and capture its output.
    fn exec(&self, binary: Binary, args: &[String]) -> Result<RunResult, RunError>;

    /// Like [`Exec::exec`], but a non-zero exit is an error.
    fn run(&self, binary: Binary, args: &[String]) -> Result<RunResult, RunError> {
        let result = self.exec(binary, args)?;
        if !result.success() {
            return Err(RunError::Exit {
                program: binary.name().into(),
                code: result.exit_code,
                output: result.combined(),
            });
        }
        Ok(result)
    }
}

/// Runs the real binaries from the configured directory.
pub struct SystemExec {
    bin_dir: PathBuf,
    cwd: PathBuf,
}

impl SystemExec {
    pub fn new(settings: &Settings) -> Self {
        Self {
            bin_dir: settings.docker_path.clone(),
            cwd: settings.compose_dir.clone(),
        }
    }
}

impl Exec for SystemExec {
    fn exec(&self, binary: Binary, args: &[String]) -> Result<RunResult, RunError> {
        let program = self.bin_dir.join(binary.name());
        let start = Instant::now();

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| RunError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        let result = RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
            elapsed_ms: start.elapsed().as_millis(),
        };
        debug!(
            program = binary.name(),
            ?args,
            exit_code = result.exit_code,
            elapsed_ms = result.elapsed_ms as u64,
            "cli call finished"
        );
        Ok(result)
    }
}
