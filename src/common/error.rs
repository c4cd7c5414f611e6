// Error types for backend calls and inventory runs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use thiserror::Error;

/// Which side of a call a structured API error is blamed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fault {
    /// The request was at fault (4xx).
    Client,

    /// The service was at fault (5xx).
    Server,

    /// No HTTP status was available to decide.
    Unknown,
}

impl Fault {
    /// Return the `Fault` for the given HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Client,
            500..=599 => Self::Server,
            _         => Self::Unknown,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fault = match self {
            Self::Client  => "client",
            Self::Server  => "server",
            Self::Unknown => "unknown",
        };

        write!(f, "{}", fault)
    }
}

/// Errors returned by the storage client adapter.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BackendError {
    /// The service answered with a structured API error.
    #[error("API error {code}: {message} (fault: {fault})")]
    Api {
        /// Error code, eg. `AccessDenied`.
        code:    String,
        /// Human readable message from the service.
        message: String,
        /// Whether the client or the server is to blame.
        fault:   Fault,
    },

    /// The call was abandoned because the run was cancelled.
    #[error("Operation cancelled")]
    Cancelled,

    /// Any other failure, eg. a connection or timeout error.
    #[error("{0}")]
    Other(String),
}

impl BackendError {
    /// Return a new `BackendError::Api`.
    pub fn api(
        code:    impl Into<String>,
        message: impl Into<String>,
        fault:   Fault,
    ) -> Self {
        Self::Api {
            code:    code.into(),
            message: message.into(),
            fault,
        }
    }

    /// Returns `true` if this error came from a cancelled call.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Errors that abort an inventory run.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The bucket listing failed, nothing was processed.
    #[error("Failed to list buckets")]
    Listing(#[source] BackendError),

    /// The location of a bucket couldn't be found.
    #[error("Failed to get location of bucket '{bucket}'")]
    LocationLookup {
        /// Bucket being processed.
        bucket: String,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },

    /// The ACL of a bucket couldn't be retrieved.
    #[error("Failed to get ACL of bucket '{bucket}'")]
    AclLookup {
        /// Bucket being processed.
        bucket: String,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },

    /// The run was cancelled between backend calls.
    #[error("Inventory cancelled")]
    Cancelled,
}
