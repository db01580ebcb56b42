use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed sign request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sign request exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },
}
