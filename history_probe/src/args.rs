//! Command-line interface of the probe.
//!
//! The probe takes no options; `clap` only provides `--help` and `--version`.
use clap::Parser;

/// Posts a fixed history request to the Cloud Run function and prints the reply.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {}
