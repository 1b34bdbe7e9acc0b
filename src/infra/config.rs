use crate::error::{Result, StatusError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default compose file names, looked up in the home directory in this order.
pub const DEFAULT_COMPOSE_FILE_NAMES: [&str; 2] = ["compose.yaml", "docker-compose.yaml"];

pub fn default_home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Inputs of the compose file lookup, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Explicit compose file (`COMPOSE_FILE`); disables the defaults when set
    pub override_path: Option<PathBuf>,
    /// Directory holding the default compose files
    pub home_dir: PathBuf,
}

impl LocatorConfig {
    pub fn new(override_path: Option<PathBuf>, home_dir: PathBuf) -> Self {
        Self {
            override_path,
            home_dir,
        }
    }

    /// Paths that will be checked, in order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match &self.override_path {
            Some(path) => vec![expand_tilde(path, &self.home_dir)],
            None => DEFAULT_COMPOSE_FILE_NAMES
                .iter()
                .map(|name| self.home_dir.join(name))
                .collect(),
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new(None, default_home_dir())
    }
}

/// Resolves the compose file to read.
pub fn locate_compose_file(config: &LocatorConfig) -> Result<PathBuf> {
    let candidates = config.candidates();

    for candidate in &candidates {
        if candidate.is_file() {
            debug!("Using compose file {:?}", candidate);
            return Ok(candidate.clone());
        }
        debug!("No compose file at {:?}", candidate);
    }

    Err(StatusError::FileNotFound { tried: candidates })
}

fn expand_tilde(path: &Path, home_dir: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let home = home_dir.to_string_lossy();
    let expanded = shellexpand::tilde_with_context(raw.as_ref(), || Some(home.as_ref()));
    PathBuf::from(expanded.into_owned())
}
