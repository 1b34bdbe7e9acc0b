use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatusError>;

/// Fatal failures of a status run.
///
/// Unrecognized container states are deliberately absent: they are reported
/// as `StatusCategory::Unknown` instead of aborting the run.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error(
        "compose file not found (tried {}). Create one or point COMPOSE_FILE at an existing file",
        display_paths(.tried)
    )]
    FileNotFound { tried: Vec<PathBuf> },

    #[error("could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path:?} has no 'services' mapping")]
    Schema { path: PathBuf },

    #[error("'{command}' failed: {reason}. Verify that Docker Compose is installed and running")]
    ProcessInvocation { command: String, reason: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
