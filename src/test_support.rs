use crate::domain::StatusSource;
use crate::error::{Result, StatusError};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Canned `StatusSource` recording every directory it was queried for.
#[derive(Debug)]
pub struct MockStatusSource {
    output: RwLock<String>,
    fail_with: RwLock<Option<String>>,
    queried: RwLock<Vec<PathBuf>>,
}

impl MockStatusSource {
    pub fn new() -> Self {
        Self::with_output("")
    }

    pub fn with_output(output: &str) -> Self {
        Self {
            output: RwLock::new(output.to_string()),
            fail_with: RwLock::new(None),
            queried: RwLock::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        let mock = Self::new();
        mock.set_fail_with(reason);
        mock
    }

    pub fn set_output(&self, output: &str) {
        *self.output.write().unwrap() = output.to_string();
    }

    pub fn set_fail_with(&self, reason: &str) {
        *self.fail_with.write().unwrap() = Some(reason.to_string());
    }

    pub fn queried_dirs(&self) -> Vec<PathBuf> {
        self.queried.read().unwrap().clone()
    }
}

impl Default for MockStatusSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSource for MockStatusSource {
    fn container_states(&self, project_dir: &Path) -> Result<String> {
        self.queried.write().unwrap().push(project_dir.to_path_buf());

        if let Some(reason) = self.fail_with.read().unwrap().clone() {
            return Err(StatusError::ProcessInvocation {
                command: self.describe(),
                reason,
            });
        }

        Ok(self.output.read().unwrap().clone())
    }

    fn describe(&self) -> String {
        "mock compose ps -a".to_string()
    }
}
