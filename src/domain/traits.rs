use crate::error::Result;
use std::fmt::Debug;
use std::path::Path;

/// Source of live container states for a compose project
pub trait StatusSource: Send + Sync + Debug {
    /// Returns the raw `NAME<tab>STATE` listing of every container (running or
    /// not) belonging to the compose project rooted at `project_dir`.
    fn container_states(&self, project_dir: &Path) -> Result<String>;

    /// Human-readable command used for the query, for tips and diagnostics
    fn describe(&self) -> String;
}
