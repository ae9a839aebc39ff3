pub mod image_rs;
pub mod tokio_spawn;
