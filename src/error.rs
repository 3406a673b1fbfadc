use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Malformed stored value: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never got a response (connection refused, dns, tls...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Server did not return a session token")]
    MissingToken,
}

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Failed to read photo: {0}")]
    Photo(#[from] std::io::Error),

    #[error("No photo selected")]
    NoPhoto,

    #[error("An upload is already in progress or finished")]
    Busy,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to open session store: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to build http client: {0}")]
    Api(#[from] ApiError),
}
