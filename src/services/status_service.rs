use crate::domain::{ServiceReport, StatusSource};
use crate::error::Result;
use crate::infra::list_services;
use crate::services::reconciler::reconcile;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Lists declared services and reconciles them against live container states
pub struct StatusService {
    source: Arc<dyn StatusSource>,
}

impl StatusService {
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        Self { source }
    }

    /// Builds the status report for `compose_file`.
    ///
    /// The container query runs from the compose file's directory so the
    /// orchestration CLI resolves the same project. It is skipped when no
    /// service is declared.
    pub fn collect(&self, compose_file: &Path) -> Result<ServiceReport> {
        let services = list_services(compose_file)?;

        if services.is_empty() {
            info!("No services declared in {:?}", compose_file);
            return Ok(ServiceReport::default());
        }

        let raw = self.source.container_states(project_dir(compose_file))?;
        Ok(reconcile(&services, &raw))
    }

    /// Command the user can run for the full listing
    pub fn query_command(&self) -> String {
        self.source.describe()
    }
}

/// Directory the compose project is rooted at.
pub fn project_dir(compose_file: &Path) -> &Path {
    match compose_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
