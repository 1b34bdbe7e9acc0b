pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;

// Exposed for integration tests
pub mod test_support;

pub use domain::{ContainerObservation, ServiceReport, ServiceStatus, StatusCategory, StatusSource};
pub use error::StatusError;
pub use infra::{DockerAdapter, LocatorConfig};
pub use services::StatusService;
