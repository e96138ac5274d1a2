use crate::Operation;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during API calls.
///
/// Network failures, non-success statuses and undecodable bodies are all the
/// same failure from the caller's point of view.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{operation}: {message} {location}")]
    RequestFailed {
        operation: Operation,
        /// HTTP status, when a response arrived
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl ClientError {
    /// Non-success response
    #[track_caller]
    pub fn status(operation: Operation, status: StatusCode) -> Self {
        ClientError::RequestFailed {
            operation,
            status: Some(status.as_u16()),
            message: format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            ),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Request never got a response (connect, DNS, invalid URL, ...)
    #[track_caller]
    pub fn transport(operation: Operation, err: reqwest::Error) -> Self {
        ClientError::RequestFailed {
            operation,
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }

    /// Successful response whose body could not be read or decoded
    #[track_caller]
    pub fn decode(operation: Operation, status: StatusCode, err: reqwest::Error) -> Self {
        ClientError::RequestFailed {
            operation,
            status: Some(status.as_u16()),
            message: format!("invalid response body: {err}"),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ClientError::RequestFailed { operation, .. } => *operation,
        }
    }

    pub fn http_status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => *status,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
