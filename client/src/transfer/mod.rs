//! Transfer request and status models
//!
//! The descriptor is what gets POSTed to the MQ web server; the status
//! types mirror the body returned when a transfer handle is queried.

pub mod descriptor;
pub mod status;

pub use descriptor::{build_transfer_descriptor, TransferDescriptor};
pub use status::{TransferQueryResponse, TransferStatus};
