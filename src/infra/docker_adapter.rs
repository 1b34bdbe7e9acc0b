use crate::domain::StatusSource;
use crate::error::{Result, StatusError};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

// Service name first so declared services match exactly; the container name
// stays available for listings from other compose implementations.
const PS_ARGS: [&str; 5] = [
    "compose",
    "ps",
    "-a",
    "--format",
    "{{.Service}}\t{{.Status}}\t{{.Name}}",
];

/// Queries container states through `docker compose ps`.
#[derive(Debug, Clone)]
pub struct DockerAdapter {
    program: String,
}

impl DockerAdapter {
    pub fn new() -> Self {
        Self::with_program("docker")
    }

    /// Uses a different executable exposing the same `compose ps` interface.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invocation_error(&self, reason: impl Into<String>) -> StatusError {
        StatusError::ProcessInvocation {
            command: self.describe(),
            reason: reason.into(),
        }
    }

    fn ensure_success(&self, output: Output) -> Result<String> {
        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            format!("exited with {} ({stderr})", output.status)
        };

        Err(self.invocation_error(reason))
    }
}

impl Default for DockerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSource for DockerAdapter {
    fn container_states(&self, project_dir: &Path) -> Result<String> {
        debug!("Running {} in {:?}", self.describe(), project_dir);

        let output = Command::new(&self.program)
            .args(PS_ARGS)
            .current_dir(project_dir)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    self.invocation_error(format!("'{}' executable not found", self.program))
                }
                _ => self.invocation_error(e.to_string()),
            })?;

        self.ensure_success(output)
    }

    fn describe(&self) -> String {
        format!("{} compose ps -a", self.program)
    }
}
