use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid path '{path}': expected a directory or a .txt file")]
    InvalidPath { path: std::path::PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
