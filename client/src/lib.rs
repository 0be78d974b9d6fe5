pub mod config;
pub mod constants;
pub mod errors;
pub mod flow;
pub mod http;
pub mod transfer;

// Re-export commonly used types
pub use config::{Config, ConfigManager};
pub use errors::ClientError;
pub use flow::{run_transfer, RunSummary};
pub use http::{CallStatus, PollOutcome, Submission, TransferHandle};
pub use transfer::{TransferDescriptor, TransferStatus};
