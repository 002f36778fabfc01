//! Error type shared by the probe library and binary.
//!
//! `ProbeError` covers the failures that escape the probe: transport faults,
//! stdout write errors, JSON serialisation errors and malformed request
//! envelopes. A non-200 status or an undecodable response body is not an
//! error; those are reported on the console instead.
use std::io;

use thiserror::Error;

/// Unified error type for the history probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Failure below the HTTP layer: DNS resolution, connect, or reading the body.
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The request envelope failed validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A date field was not a `YYYY-MM-DD` calendar date.
    #[error("Date parse error: {0}")]
    Date(#[from] chrono::ParseError),
}
