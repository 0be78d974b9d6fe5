//! Canned request and response data

use mft_client::Config;
use serde_json::{json, Value};

pub const TEST_USER: &str = "mftuser";
pub const TEST_PASSWORD: &str = "s3cret";

/// `Basic base64("mftuser:s3cret")`
pub const TEST_AUTH_HEADER: &str = "Basic bWZ0dXNlcjpzM2NyZXQ=";

pub const TRANSFER_PATH: &str = "/ibmmq/rest/v2/admin/mft/transfer";

/// Default client configuration pointed at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config {
        transfer_url: format!("{}{}", base_url, TRANSFER_PATH),
        user_id: TEST_USER.to_string(),
        password: TEST_PASSWORD.to_string(),
        ..Config::default()
    }
}

/// Status body for a transfer whose items all succeeded
pub fn successful_transfer_body(transfer_id: &str) -> Value {
    json!({
        "transfer": [{
            "id": transfer_id,
            "status": {
                "state": "successful",
                "description": "BFGRP0032I: The file transfer request has successfully completed."
            },
            "transferSet": {
                "item": [{
                    "status": { "state": "successful", "description": "copied" }
                }]
            }
        }]
    })
}

/// Status body with one successful item and one that failed with `reason`
pub fn partially_failed_transfer_body(transfer_id: &str, reason: &str) -> Value {
    json!({
        "transfer": [{
            "id": transfer_id,
            "status": {
                "state": "failed",
                "description": "BFGRP0034I: The file transfer request has completed with failures."
            },
            "transferSet": {
                "item": [
                    { "status": { "state": "successful", "description": "copied" } },
                    { "status": { "state": "failed", "description": reason } }
                ]
            }
        }]
    })
}

/// Status body for a transfer the agent has not finished yet
pub fn in_progress_transfer_body(transfer_id: &str) -> Value {
    json!({
        "transfer": [{
            "id": transfer_id,
            "status": { "state": "inProgress", "description": "" },
            "transferSet": { "item": [] }
        }]
    })
}
