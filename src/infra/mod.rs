pub mod compose_file;
pub mod config;
pub mod docker_adapter;

pub use compose_file::list_services;
pub use config::{LocatorConfig, locate_compose_file};
pub use docker_adapter::DockerAdapter;
