use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Response body of `GET /api/documents`.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<String>,
}

/// Response body of `GET /api/document/{doc}/pages`. Page order matches
/// physical page order and is fixed by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PageList {
    pub pages: Vec<String>,
}

/// Success body of `POST /api/process_pdfs`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessOutcome {
    pub message: String,
}

/// Error body the backend attaches to non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
