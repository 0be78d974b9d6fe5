// File: client/src/http/mod.rs
//! HTTP communication with the MQ web server's MFT REST interface
//!
//! # Communication Pattern
//!
//! ```text
//! Client → POST transfer descriptor → MQ web server
//!    ↓                                     ↓
//!  handle ←──── 202 + location header ─────┘
//!    ↓
//!  GET {handle}?attributes=* → 200 + transfer status
//! ```
//!
//! Every call builds its own `reqwest::Client`, sends exactly one request and
//! drops the response before returning. Failures are logged and reduced to a
//! [`CallStatus`]; nothing on this path returns an error to the caller.

pub mod poller;
pub mod request;
pub mod submitter;

use reqwest::StatusCode;
use std::fmt;

use crate::constants::http::FAILURE_SENTINEL;

pub use poller::{poll_transfer_status, PollOutcome};
pub use request::{basic_auth_value, build_request, Credentials};
pub use submitter::{submit_transfer, Submission, TransferHandle};

/// Result of one REST call: either the HTTP status the server answered with,
/// or `Failed` when no usable status was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Failed,
    Http(StatusCode),
}

impl CallStatus {
    /// Numeric form, with `Failed` mapped to a value no HTTP status can take
    pub fn code(&self) -> i32 {
        match self {
            CallStatus::Failed => FAILURE_SENTINEL,
            CallStatus::Http(status) => i32::from(status.as_u16()),
        }
    }

    pub fn is(&self, expected: StatusCode) -> bool {
        matches!(self, CallStatus::Http(status) if *status == expected)
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallStatus::Failed => write!(f, "request failed"),
            CallStatus::Http(status) => write!(f, "{}", status),
        }
    }
}
