use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Payment API fetch operations
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// HTTP client construction
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Payment API fetch error types
///
/// A range fetch fails as a whole only with `Validation`, `Unauthenticated`
/// or `Superseded`. Per-day network and parse problems are absorbed by the
/// range routine and never reach the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request parameters rejected before any request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No bearer token available from the identity integration
    #[error("Not authenticated: no bearer token available")]
    Unauthenticated,

    /// A newer fetch started on the same generation counter while this one was in flight
    #[error("Fetch superseded by a newer request (generation {generation})")]
    Superseded { generation: u64 },

    /// A single-item lookup got the "no data" sentinel or an unusable body
    #[error("PIX charge not found: {pix_id}")]
    NotFound { pix_id: String },

    /// Network-level failure (connect, timeout, body read)
    #[error("Request failed: {url} - {message}")]
    Request { url: String, message: String },

    /// Non-2xx HTTP status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Whether this error means the caller should prompt for sign-in rather
    /// than show an error banner
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, FetchError::Unauthenticated)
            || matches!(self, FetchError::Status { status, .. } if *status == 401 || *status == 403)
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for payment API fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
