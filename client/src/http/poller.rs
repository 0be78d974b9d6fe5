// File: client/src/http/poller.rs
use reqwest::{Method, StatusCode};
use tracing::{error, info, warn};

use super::request::{build_request, new_client, Credentials};
use super::submitter::TransferHandle;
use super::CallStatus;
use crate::config::Config;
use crate::constants::http::ALL_ATTRIBUTES_QUERY;
use crate::errors::ClientError;
use crate::transfer::{TransferQueryResponse, TransferStatus};

/// Result of one status query. `transfer` is only present when the server
/// answered 200 with a body describing at least one transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    pub status: CallStatus,
    pub transfer: Option<TransferStatus>,
}

impl PollOutcome {
    fn without_transfer(status: CallStatus) -> Self {
        Self {
            status,
            transfer: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is(StatusCode::OK)
    }
}

/// Query every attribute of the transfer behind `handle` and report its state
pub async fn poll_transfer_status(config: &Config, handle: &TransferHandle) -> PollOutcome {
    info!("Querying status of transfer");

    let url = format!("{}{}", handle, ALL_ATTRIBUTES_QUERY);

    let response = match send_query(config, &url).await {
        Ok(response) => response,
        Err(e) => {
            error!("{}", e);
            return PollOutcome::without_transfer(CallStatus::Failed);
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        warn!("Response code received: {}", status);
        return PollOutcome::without_transfer(CallStatus::Http(status));
    }

    let transfer = match read_transfer_status(response, handle.as_str()).await {
        Ok(transfer) => transfer,
        Err(e) => {
            error!("{}", e);
            return PollOutcome::without_transfer(CallStatus::Http(status));
        }
    };

    report_transfer_status(&transfer);

    PollOutcome {
        status: CallStatus::Http(status),
        transfer: Some(transfer),
    }
}

async fn send_query(config: &Config, url: &str) -> Result<reqwest::Response, ClientError> {
    let client = new_client(url)?;
    let request = build_request(
        &client,
        Method::GET,
        url,
        None,
        &Credentials::from_config(config),
    )?;

    client
        .execute(request)
        .await
        .map_err(|e| ClientError::transport(url, e))
}

async fn read_transfer_status(
    response: reqwest::Response,
    url: &str,
) -> Result<TransferStatus, ClientError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::body_read(url, e))?;

    let parsed: TransferQueryResponse =
        serde_json::from_slice(&body).map_err(|e| ClientError::invalid_response(url, e))?;

    TransferStatus::from_response(parsed)
        .ok_or_else(|| ClientError::invalid_response(url, "no transfer in response"))
}

fn report_transfer_status(transfer: &TransferStatus) {
    info!(
        "Status of transfer with ID {} is {}",
        transfer.id, transfer.overall.state
    );

    if transfer.is_successful() {
        return;
    }

    warn!("{}", transfer.overall.description);
    warn!("Following errors occurred:");
    for description in transfer.failed_item_descriptions() {
        warn!("{}", description);
    }
}
