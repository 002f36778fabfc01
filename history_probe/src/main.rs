//! History Probe — posts one request to the historical-data-with-indicators
//! Cloud Run function and prints what came back.
//!
//! The request is fixed (`AAPL`, `2023-01-01`..`2023-10-01`, see
//! `history_common::net`). The report on stdout contains the status code, the
//! response headers and the body: pretty-printed JSON when it decodes, raw text
//! otherwise. Logs go to stderr; set `RUST_LOG=debug` for more detail.
//!
//! A transport fault (DNS, connection refused, broken body) is not handled:
//! it is returned from `main` and the process exits with a non-zero status.
#![warn(missing_docs)]
mod args;
mod client;
mod probe;
#[cfg(test)]
mod test_server;

use crate::args::Args;
use crate::client::HistoryClient;
use clap::Parser;
use history_common::net::FUNCTION_URL;
use history_common::{HistoryRequest, ProbeError, Result};
use log::error;
use std::io;

fn main() -> Result<(), ProbeError> {
    init_logger();
    let _args = Args::parse();

    let request = HistoryRequest::fixed()?;
    let client = HistoryClient::new(FUNCTION_URL)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    probe::run(&client, &request, &mut out).inspect_err(|e| error!("Probe failed: {}", e))
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
