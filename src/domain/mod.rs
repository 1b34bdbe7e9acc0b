mod observation;
mod status;
pub mod traits;

pub use observation::{ContainerObservation, parse_status_output};
pub use status::{ServiceReport, ServiceStatus, StatusCategory};
pub use traits::StatusSource;
