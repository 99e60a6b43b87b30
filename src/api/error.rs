use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed {context} response: {source}")]
    Parse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("key not found: {key}")]
    NotFound { key: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
