//!
//! Common types for the history probe.
//!
//! This crate aggregates:
//! - `error` — unified error type `ProbeError`.
//! - `result` — handy `Result<T, ProbeError>` alias.
//! - `net` — endpoint URL and the literal request parameters.
//! - `envelope` — the JSON request sent to the history function.
//! - `response` — status, headers and body of the reply.
//! - `json` — lenient JSON decoding and ASCII pretty-printing.
//! - `render` — the console report.
//! - `history` — typed view of a successful reply.
#![warn(missing_docs)]
pub mod envelope;
pub mod error;
pub mod history;
pub mod json;
pub mod net;
pub mod render;
pub mod response;
pub mod result;

pub use envelope::HistoryRequest;
pub use error::ProbeError;
pub use response::{Body, ResponseEnvelope};
pub use result::Result;
