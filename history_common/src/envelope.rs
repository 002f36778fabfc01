//! Request envelope sent to the history function.
//!
//! The function expects its arguments wrapped under a `data` key:
//!
//! ```json
//! {"data": {"ticker": "AAPL", "startDate": "2023-01-01", "endDate": "2023-10-01"}}
//! ```
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ProbeError;
use crate::net::{DATE_FORMAT, DEFAULT_END_DATE, DEFAULT_START_DATE, DEFAULT_TICKER};
use crate::result::Result;

/// Arguments of one history request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    ticker: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Wire wrapper around a [`HistoryRequest`].
#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    /// The wrapped request arguments.
    pub data: &'a HistoryRequest,
}

impl HistoryRequest {
    /// Creates a request for `ticker` over `start..=end`.
    ///
    /// Fails if the ticker is blank or the range is reversed.
    pub fn new(ticker: &str, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ProbeError::InvalidRequest("ticker is empty".to_string()));
        }
        if start_date > end_date {
            return Err(ProbeError::InvalidRequest(format!(
                "start date {} is after end date {}",
                start_date, end_date
            )));
        }
        Ok(HistoryRequest {
            ticker: ticker.to_string(),
            start_date,
            end_date,
        })
    }

    /// Parses both dates as `YYYY-MM-DD` before delegating to [`Self::new`].
    pub fn parse(ticker: &str, start_date: &str, end_date: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT)?;
        let end = NaiveDate::parse_from_str(end_date, DATE_FORMAT)?;
        Self::new(ticker, start, end)
    }

    /// The request the probe always sends.
    pub fn fixed() -> Result<Self> {
        Self::parse(DEFAULT_TICKER, DEFAULT_START_DATE, DEFAULT_END_DATE)
    }

    /// Requested ticker symbol.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// First day of the range.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the range.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Wraps the request under the `data` key.
    pub fn envelope(&self) -> RequestEnvelope<'_> {
        RequestEnvelope { data: self }
    }

    /// Encode the wrapped request to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(&self.envelope())?;
        Ok(json)
    }
}
