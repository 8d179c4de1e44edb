use thiserror::Error;

/// Errors raised while building style layers and sources
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Invalid value for `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("Failed to (de)serialize style JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for style operations
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    pub(crate) fn invalid_option(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}
