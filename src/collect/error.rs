use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Collection from {collector} failed: {message}")]
    Failed { collector: String, message: String },
    #[error("Source {collector} is not configured: {message}")]
    NotConfigured { collector: String, message: String },
}
