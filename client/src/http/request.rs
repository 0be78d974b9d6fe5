// File: client/src/http/request.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request};

use crate::config::Config;
use crate::constants::http::CSRF_TOKEN_HEADER;
use crate::errors::ClientError;

/// Basic-auth credentials for the MQ web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.user_id.clone(), config.password.clone())
    }
}

/// `Authorization` header value: `Basic base64(user:password)`
pub fn basic_auth_value(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.user_id, credentials.password);
    format!("Basic {}", STANDARD.encode(pair))
}

/// Fresh client for a single call; connections are not shared between calls
pub fn new_client(url: &str) -> Result<Client, ClientError> {
    Client::builder()
        .build()
        .map_err(|e| ClientError::request_build(url, e))
}

/// Build an authenticated request for the MFT REST interface.
///
/// The CSRF header is always sent, blank. `Content-Type` is only set when
/// there is a body to describe.
pub fn build_request(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<String>,
    credentials: &Credentials,
) -> Result<Request, ClientError> {
    let mut builder = client
        .request(method, url)
        .header(AUTHORIZATION, basic_auth_value(credentials))
        .header(CSRF_TOKEN_HEADER, "");

    if let Some(body) = body {
        builder = builder.header(CONTENT_TYPE, "application/json").body(body);
    }

    builder
        .build()
        .map_err(|e| ClientError::request_build(url, e))
}
