use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ProcessingSettings {
    pub request_timeout: Duration,
}
