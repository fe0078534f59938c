//! Error types for the deliverycheck CLI

use thiserror::Error;

/// Result type alias for deliverycheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
///
/// Each pipeline stage wraps the underlying [`ApiError`] in its own variant so
/// the run can report exactly which stage stopped it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to obtain access token: {0}")]
    Auth(ApiError),

    #[error("Failed to list organizations: {0}")]
    Directory(ApiError),

    #[error("Failed to fetch deliveries: {0}")]
    Fetch(ApiError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("No organizations are visible to this API login.")]
    NoOrganizations,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors, shared by every client stage
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API login rejected (401): {0}")]
    Unauthorized(String),

    #[error("Access denied (403). The API login has no permission for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Token response did not contain a token")]
    MissingToken,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "API login not configured. Run `deliverycheck init`, pass --api-login or set DELIVERYCHECK_API_LOGIN."
    )]
    MissingApiLogin,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Invalid organization selection entered by the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No organizations selected. Enter comma-separated numbers, or 0 for all.")]
    Empty,

    #[error("'{0}' is not a number. Enter organization numbers separated by commas.")]
    NotANumber(String),

    #[error("Organization number {index} is out of range (1-{max}).")]
    OutOfRange { index: usize, max: usize },
}
