pub mod blocking_task;
pub mod image_codec;
pub mod text_overlay;
pub mod timeout;
