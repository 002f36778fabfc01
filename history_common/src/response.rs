//! Response envelope handed from the HTTP client to the renderer.
//!
//! The body is kept as raw text; whether it is JSON is only decided when the
//! renderer asks for it through [`ResponseEnvelope::body`].
use serde_json::Value;

use crate::json::parse_lenient;

/// HTTP status treated as success.
pub const STATUS_OK: u16 = 200;

/// Response body resolved at inspection time.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The body decoded as JSON.
    Json(Value),
    /// The body did not decode; raw text as received.
    Text(String),
}

/// Status, headers and body of one HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    status: u16,
    headers: Vec<(String, String)>,
    text: String,
}

impl ResponseEnvelope {
    /// Builds an envelope, folding repeated header names into a single entry.
    pub fn new<I>(status: u16, headers: I, text: String) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            status,
            headers: fold_headers(headers),
            text,
        }
    }

    /// Numeric HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` only for status 200.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Headers in the order the server sent them, one entry per name.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decodes the body as JSON, falling back to the raw text.
    ///
    /// Bare `NaN`/`Infinity`/`-Infinity` tokens are accepted, see [`crate::json`].
    pub fn body(&self) -> Body {
        match parse_lenient(&self.text) {
            Some(value) => Body::Json(value),
            None => Body::Text(self.text.clone()),
        }
    }
}

/// Merges headers whose names match case-insensitively.
///
/// The first occurrence keeps its position and spelling; later values are
/// appended with `", "`.
pub fn fold_headers<I>(headers: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut folded: Vec<(String, String)> = Vec::new();
    for (name, value) in headers {
        match folded
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(index) => {
                let joined = &mut folded[index].1;
                joined.push_str(", ");
                joined.push_str(&value);
            }
            None => folded.push((name, value)),
        }
    }
    folded
}
