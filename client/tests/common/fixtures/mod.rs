//! This module provides reusable test utilities:
//! - Mock MQ web server exposing the MFT transfer endpoints
//! - Canned transfer status bodies
//! - Log capture for asserting on reported output

// Not every test binary uses every fixture
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_mft;
pub mod test_data;

pub use log_capture::LogCapture;
pub use mock_mft::{MockMftServer, TimedStatusResponder};
pub use test_data::*;
