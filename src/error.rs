// Error types for the fetch/display pipeline
//
// Fetch errors propagate up to the panel load path and become inline panel
// error state. Clipboard/share errors stay at the action boundary and only
// ever surface as transient toasts. Nothing here is fatal.

use std::fmt;

use crate::api::content::ContentKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Application error taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport-level failure (DNS, connection refused, platform timeout)
    Network(String),

    /// The server answered with a non-success status
    Http { status: u16, status_text: String },

    /// Well-formed response, but the array was empty
    EmptyResult(ContentKind),

    /// A fetcher-level wrapper carrying the underlying message
    FetchFailed {
        kind: ContentKind,
        message: String,
    },

    /// Clipboard access failed
    Clipboard(String),

    /// Missing or implausible configuration (API key)
    Config(String),

    /// A task failed outside its own error handling (panicked/cancelled)
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "network error: {}", msg),
            Error::Http {
                status,
                status_text,
            } => write!(f, "API request failed: {} {}", status, status_text),
            Error::EmptyResult(ContentKind::Quote) => {
                write!(f, "No quotes found for this category")
            }
            Error::EmptyResult(ContentKind::Fact) => write!(f, "No facts available"),
            Error::FetchFailed { kind, message } => match kind {
                ContentKind::Quote => write!(f, "Failed to get quote: {}", message),
                ContentKind::Fact => write!(f, "Failed to get fact: {}", message),
            },
            Error::Clipboard(msg) => write!(f, "clipboard error: {}", msg),
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Internal(msg) => write!(f, "unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Wrap any lower-level error into a fetcher-level error for `kind`
    pub fn into_fetch_failed(self, kind: ContentKind) -> Error {
        match self {
            // Empty results and internal failures keep their identity -
            // they drive different surfaces than ordinary fetch errors
            Error::EmptyResult(_) | Error::Internal(_) => self,
            other => Error::FetchFailed {
                kind,
                message: other.to_string(),
            },
        }
    }

    /// Short human-readable message for inline panel display
    pub fn panel_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Status errors are mapped explicitly in the client; everything
        // reaching this conversion is a transport failure.
        Error::Network(err.to_string())
    }
}
