// File: ./src/client/error.rs
use http::StatusCode;
use thiserror::Error;

/// Why a feed could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failure, unusable URL, or a non-success response status.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch {
        url: String,
        status: Option<StatusCode>,
        reason: String,
    },
    /// The body arrived but is not the JSON we expect.
    #[error("Failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        LoadError::Fetch {
            url: url.to_string(),
            status: None,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn status(url: &str, status: StatusCode) -> Self {
        LoadError::Fetch {
            url: url.to_string(),
            status: Some(status),
            reason: format!("Response status: {}", status.as_u16()),
        }
    }

    /// The HTTP status, when the server answered at all.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            LoadError::Fetch { status, .. } => *status,
            LoadError::Parse { .. } => None,
        }
    }
}
