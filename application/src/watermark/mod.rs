pub mod data_uri;
pub mod pipeline;
pub mod request;
pub mod service;
pub mod strategy;
