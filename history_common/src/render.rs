//! Console report for a [`ResponseEnvelope`].
//!
//! Layout:
//!
//! ```text
//! Status: <code>
//!
//! --- Response Headers ---
//! <name>: <value>
//! --------------------------
//!
//! <success block | error block>
//! ```
use std::io::Write;

use serde_json::Value;

use crate::json::to_pretty_ascii;
use crate::response::{Body, ResponseEnvelope};
use crate::result::Result;

/// Opens the header block.
pub const HEADERS_BANNER: &str = "--- Response Headers ---";
/// Closes the header block.
pub const HEADERS_RULE: &str = "--------------------------";
/// Printed before the JSON body of a 200 response.
pub const SUCCESS_BANNER: &str = "Response received (full JSON object):";
/// Printed when a 200 response body is not JSON.
pub const DECODE_ERROR: &str = "Error: Could not decode JSON from response.";
/// Prefix of the raw body on a 200 decode failure.
pub const RAW_TEXT_PREFIX: &str = "Raw response text:";

/// Writes the full report for `response` to `out`.
pub fn render<W: Write>(out: &mut W, response: &ResponseEnvelope) -> Result<()> {
    writeln!(out, "Status: {}", response.status())?;
    render_headers(out, response.headers())?;

    if response.is_ok() {
        match response.body() {
            Body::Json(value) => {
                writeln!(out, "{}", SUCCESS_BANNER)?;
                writeln!(out, "{}", pretty(&value)?)?;
            }
            Body::Text(raw) => {
                writeln!(out, "{}", DECODE_ERROR)?;
                writeln!(out, "{} {}", RAW_TEXT_PREFIX, raw)?;
            }
        }
    } else {
        writeln!(out, "Error Response ({}):", response.status())?;
        match response.body() {
            Body::Json(value) => writeln!(out, "{}", pretty(&value)?)?,
            Body::Text(raw) => writeln!(out, "{}", raw)?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes the header block, one line per header.
pub fn render_headers<W: Write>(out: &mut W, headers: &[(String, String)]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", HEADERS_BANNER)?;
    for (name, value) in headers {
        writeln!(out, "{}: {}", name, value)?;
    }
    writeln!(out, "{}", HEADERS_RULE)?;
    writeln!(out)?;
    Ok(())
}

/// Two-space indented JSON with non-ASCII escaped.
pub fn pretty(value: &Value) -> Result<String> {
    to_pretty_ascii(value)
}
