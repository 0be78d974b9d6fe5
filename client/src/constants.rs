//! Application-wide constants for the transfer client
//!
//! Organized by category so the REST wire details, the retry window and
//! the default configuration values each have a single source of truth.

use std::time::Duration;

/// REST interface constants
pub mod http {
    /// CSRF header the MQ web server requires on every request, even when blank
    pub const CSRF_TOKEN_HEADER: &str = "ibm-mq-rest-csrf-token";

    /// Query string appended to a transfer handle to request every attribute
    pub const ALL_ATTRIBUTES_QUERY: &str = "?attributes=*";

    /// Numeric code reported when no HTTP status was obtained
    pub const FAILURE_SENTINEL: i32 = -1;
}

/// Status poll retry constants
pub mod retry {
    use super::Duration;

    /// Wait between the first and the second (final) status poll
    pub const STATUS_RETRY_DELAY: Duration = Duration::from_secs(5);
}

/// Transfer state names reported by the server
pub mod state {
    /// State of a finished transfer or item, compared case-insensitively
    pub const SUCCESSFUL: &str = "successful";
}

/// Default configuration values
pub mod defaults {
    pub const TRANSFER_URL: &str = "http://localhost:8080/ibmmq/rest/v2/admin/mft/transfer";
    pub const USER_ID: &str = "mqmftadminusr";
    pub const PASSWORD: &str = "mqmftpassw0rd";

    pub const SOURCE_AGENT_NAME: &str = "SRC";
    pub const SOURCE_QMGR_NAME: &str = "SRCQM";
    pub const DESTINATION_AGENT_NAME: &str = "DEST";
    pub const DESTINATION_QMGR_NAME: &str = "DESTQM";

    pub const SOURCE_ITEM_NAME: &str = "/usr/srcdir";
    pub const DESTINATION_ITEM_NAME: &str = "/usr/destdir";

    /// Config file read by the binary when `MFT_CLIENT_CONFIG` is unset
    pub const CONFIG_PATH: &str = "config/client.toml";

    /// Environment variable overriding the config file location
    pub const CONFIG_PATH_ENV: &str = "MFT_CLIENT_CONFIG";
}
