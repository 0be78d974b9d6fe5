//! Error types for the transfer client
//!
//! Every failure on the submit/poll path is turned into one of these,
//! logged, and then reduced to a status value by the caller.

use std::fmt;

/// Failure while talking to the MFT REST interface
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be built (bad URL, unusable credentials)
    RequestBuild { url: String, reason: String },

    /// Network or connection failure while sending the request
    Transport { url: String, reason: String },

    /// The response arrived but its body could not be read
    BodyRead { url: String, reason: String },

    /// The server answered with a status other than the one expected
    UnexpectedStatus { url: String, status: String },

    /// The response body did not have the expected shape
    InvalidResponse { url: String, reason: String },
}

impl ClientError {
    pub fn request_build(url: &str, reason: impl fmt::Display) -> Self {
        ClientError::RequestBuild {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn transport(url: &str, reason: impl fmt::Display) -> Self {
        ClientError::Transport {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn body_read(url: &str, reason: impl fmt::Display) -> Self {
        ClientError::BodyRead {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_response(url: &str, reason: impl fmt::Display) -> Self {
        ClientError::InvalidResponse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::RequestBuild { url, reason } => {
                write!(f, "Failed to create HTTP request for {}: {}", url, reason)
            }
            ClientError::Transport { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            ClientError::BodyRead { url, reason } => {
                write!(f, "Failed to read response from {}: {}", url, reason)
            }
            ClientError::UnexpectedStatus { url, status } => {
                write!(f, "Unexpected response from {}: {}", url, status)
            }
            ClientError::InvalidResponse { url, reason } => {
                write!(f, "Invalid response from {}: {}", url, reason)
            }
        }
    }
}

impl std::error::Error for ClientError {}
