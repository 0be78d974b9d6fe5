//! Mock MQ web server for testing
//!
//! Serves the MFT transfer submission and status endpoints without a real
//! queue manager or agents behind them.

use reqwest::header::HeaderValue;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use wiremock::{
    matchers::{header, header_exists, method, path, query_param},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

use super::test_data::{TEST_AUTH_HEADER, TRANSFER_PATH};

pub struct MockMftServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockMftServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Handle the server hands out for `transfer_id`
    pub fn handle_url(&self, transfer_id: &str) -> String {
        format!("{}{}/{}", self.base_url, TRANSFER_PATH, transfer_id)
    }

    fn submit_request() -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(TRANSFER_PATH))
            .and(header("authorization", TEST_AUTH_HEADER))
            .and(header("content-type", "application/json"))
            .and(header_exists("ibm-mq-rest-csrf-token"))
    }

    fn status_request(transfer_id: &str) -> wiremock::MockBuilder {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", TRANSFER_PATH, transfer_id)))
            .and(query_param("attributes", "*"))
            .and(header("authorization", TEST_AUTH_HEADER))
            .and(header_exists("ibm-mq-rest-csrf-token"))
    }

    /// Accept the transfer and point `location` at `location`
    pub async fn mock_submit_accepted(&self, location: &str) {
        Self::submit_request()
            .respond_with(ResponseTemplate::new(202).insert_header("location", location))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Accept the transfer with a location header carrying arbitrary bytes
    pub async fn mock_submit_accepted_with_raw_location(&self, location: &'static [u8]) {
        let value = HeaderValue::from_bytes(location).unwrap();
        Self::submit_request()
            .respond_with(ResponseTemplate::new(202).insert_header("location", value))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Accept the transfer but leave out the location header
    pub async fn mock_submit_accepted_without_location(&self) {
        Self::submit_request()
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Reject the transfer with `status`
    pub async fn mock_submit_rejected(&self, status: u16) {
        Self::submit_request()
            .respond_with(ResponseTemplate::new(status).set_body_string("BFGRS0001E"))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer status queries with 200 and `body`, expecting exactly `times` queries
    pub async fn mock_status(&self, transfer_id: &str, body: Value, times: u64) {
        Self::status_request(transfer_id)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer status queries with a bare `status`, expecting exactly `times` queries
    pub async fn mock_status_code(&self, transfer_id: &str, status: u16, times: u64) {
        Self::status_request(transfer_id)
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer status queries with 200 and a body that is not JSON
    pub async fn mock_status_garbage(&self, transfer_id: &str) {
        Self::status_request(transfer_id)
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Serve status queries from `responder`
    pub async fn mock_status_with(&self, transfer_id: &str, responder: TimedStatusResponder) {
        Self::status_request(transfer_id)
            .respond_with(responder)
            .mount(&self.server)
            .await;
    }

    /// Fail the test on drop if any status query arrives
    pub async fn forbid_status_queries(&self) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

/// Answers the first status query with `first_status` and every later one
/// with 200 and `body`, recording when each query arrived.
#[derive(Clone)]
pub struct TimedStatusResponder {
    first_status: u16,
    body: Value,
    arrivals: Arc<Mutex<Vec<Instant>>>,
}

impl TimedStatusResponder {
    pub fn new(first_status: u16, body: Value) -> Self {
        Self {
            first_status,
            body,
            arrivals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn arrivals(&self) -> Vec<Instant> {
        self.arrivals.lock().unwrap().clone()
    }
}

impl Respond for TimedStatusResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let mut arrivals = self.arrivals.lock().unwrap();
        arrivals.push(Instant::now());
        if arrivals.len() == 1 {
            ResponseTemplate::new(self.first_status)
        } else {
            ResponseTemplate::new(200).set_body_json(self.body.clone())
        }
    }
}
