// File: client/src/http/submitter.rs
use reqwest::header::LOCATION;
use reqwest::{Method, StatusCode};
use std::fmt;
use tracing::{error, info, warn};

use super::request::{build_request, new_client, Credentials};
use super::CallStatus;
use crate::config::Config;
use crate::errors::ClientError;
use crate::transfer::TransferDescriptor;

/// Status-query URL the server returns for an accepted transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferHandle(String);

impl TransferHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the submit call produced. `handle` is only ever set on 202 Accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub status: CallStatus,
    pub handle: Option<TransferHandle>,
}

impl Submission {
    fn failed() -> Self {
        Self {
            status: CallStatus::Failed,
            handle: None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status.is(StatusCode::ACCEPTED)
    }
}

/// POST the transfer descriptor to the configured transfer endpoint
pub async fn submit_transfer(config: &Config, descriptor: &TransferDescriptor) -> Submission {
    match try_submit(config, descriptor).await {
        Ok(submission) => submission,
        Err(e) => {
            error!("{}", e);
            Submission::failed()
        }
    }
}

async fn try_submit(
    config: &Config,
    descriptor: &TransferDescriptor,
) -> Result<Submission, ClientError> {
    let url = config.transfer_url.as_str();

    let body = serde_json::to_string(descriptor).map_err(|e| ClientError::request_build(url, e))?;
    let client = new_client(url)?;
    let request = build_request(
        &client,
        Method::POST,
        url,
        Some(body),
        &Credentials::from_config(config),
    )?;

    let response = client
        .execute(request)
        .await
        .map_err(|e| ClientError::transport(url, e))?;

    info!("Submitted transfer request to: {}", url);

    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .map(|value| value.to_str().map(TransferHandle::new).map_err(|e| e.to_string()));

    // Body content is not used, but it must be readable for the call to count
    response
        .bytes()
        .await
        .map_err(|e| ClientError::body_read(url, e))?;

    info!("HTTP response received. Status: {}", status);

    if status != StatusCode::ACCEPTED {
        warn!(
            "{}",
            ClientError::UnexpectedStatus {
                url: url.to_string(),
                status: status.to_string(),
            }
        );
        return Ok(Submission {
            status: CallStatus::Http(status),
            handle: None,
        });
    }

    let handle = match location {
        Some(Ok(handle)) => {
            info!("Transfer URL: {}", handle);
            Some(handle)
        }
        Some(Err(reason)) => {
            warn!(
                "{}",
                ClientError::invalid_response(
                    url,
                    format!("location header is not a readable URL ({})", reason)
                )
            );
            None
        }
        None => {
            warn!("Transfer accepted by {} but no location header was returned", url);
            None
        }
    };

    Ok(Submission {
        status: CallStatus::Http(status),
        handle,
    })
}
