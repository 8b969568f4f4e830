use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Failed to read trade export {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid trade export: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid time of day '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
}
