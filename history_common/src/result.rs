//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `ProbeError`, so functions can simply return
//! `Result<T>`.
use crate::error::ProbeError;

/// Workspace-wide `Result` alias with `ProbeError` as the default error.
pub type Result<T, E = ProbeError> = std::result::Result<T, E>;
