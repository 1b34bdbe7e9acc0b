pub mod report;
pub mod status;

pub use report::render;
