pub(crate) mod index;

// keep public for OpenAPI docs
pub mod health;
pub mod process;
