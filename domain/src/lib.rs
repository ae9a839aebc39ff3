pub mod action;
pub mod color;
pub mod error;
pub mod layout;
pub mod opacity;
pub mod raster;
pub mod watermark;
