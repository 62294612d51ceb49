//! Error types for the drive_audio crate.

use thiserror::Error;

/// Errors that can occur while extracting audio links from Google Drive.
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse credentials JSON: {0}")]
    CredentialsParseError(#[from] serde_json::Error),

    #[error("Failed to parse secrets file: {0}")]
    SecretsParseError(#[from] toml::de::Error),

    #[error("Missing secret: {0}")]
    MissingSecret(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid folder URL / ID: {0}")]
    FolderIdNotFound(String),

    #[error("JWT encoding error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Token refresh failed: {0}")]
    TokenRefreshError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for DriveError.
pub type Result<T> = std::result::Result<T, DriveError>;
