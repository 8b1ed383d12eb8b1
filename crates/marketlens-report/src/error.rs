use thiserror::Error;

/// Failure to turn part of a report into a visual or export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("category '{category}' has an unusable percentage ({value})")]
    InvalidPercentage { category: String, value: f64 },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
