// File: client/src/flow.rs
//! Submit a transfer, then check on it at most twice.
//!
//! The second status query only happens when the first one did not return
//! 200, and only after [`STATUS_RETRY_DELAY`]. There is no further polling:
//! a transfer still in progress after the second query is reported as such.

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::retry::STATUS_RETRY_DELAY;
use crate::http::{poll_transfer_status, submit_transfer, PollOutcome, Submission};
use crate::transfer::build_transfer_descriptor;

/// Everything observed during one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub submission: Submission,
    pub polls: Vec<PollOutcome>,
}

impl RunSummary {
    /// Outcome of the last status query, if any was made
    pub fn final_poll(&self) -> Option<&PollOutcome> {
        self.polls.last()
    }
}

pub async fn run_transfer(config: &Config) -> RunSummary {
    let descriptor = build_transfer_descriptor(config);
    let submission = submit_transfer(config, &descriptor).await;

    let mut polls = Vec::new();

    if !submission.is_accepted() {
        info!(
            "Transfer was not accepted ({}), skipping status query",
            submission.status
        );
        return RunSummary { submission, polls };
    }

    let handle = match submission.handle.clone() {
        Some(handle) => handle,
        None => {
            warn!("No transfer URL to query, skipping status query");
            return RunSummary { submission, polls };
        }
    };

    let first = poll_transfer_status(config, &handle).await;
    let retry = !first.is_ok();
    polls.push(first);

    if retry {
        info!(
            "Transfer status not available yet, querying again in {}s",
            STATUS_RETRY_DELAY.as_secs()
        );
        sleep(STATUS_RETRY_DELAY).await;
        polls.push(poll_transfer_status(config, &handle).await);
    }

    RunSummary { submission, polls }
}
