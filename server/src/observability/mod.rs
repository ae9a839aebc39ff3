pub mod startup_info;
pub mod tracing;
