use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuylensError {
    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis client error: {0}")]
    Client(#[from] ClientError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Settings validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid analysis endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    CreateClient(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BuylensError>;
