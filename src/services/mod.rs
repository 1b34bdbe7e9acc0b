pub mod reconciler;
mod status_service;

pub use reconciler::{MatchKind, match_observation, reconcile};
pub use status_service::{StatusService, project_dir};
