//! Typed view of a successful history response.
//!
//! The function answers with the requested ticker and one candle per trading
//! day. Field names follow the upstream data frame columns (`Date`, `Open`,
//! ..., `Stock Splits`).
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::net::DATE_FORMAT;
use crate::result::Result;

/// Daily OHLC candle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Candle {
    /// Trading day, `YYYY-MM-DD` optionally followed by a time part.
    #[serde(rename = "Date")]
    pub date: String,
    /// Opening price.
    #[serde(rename = "Open")]
    pub open: f64,
    /// Highest price.
    #[serde(rename = "High")]
    pub high: f64,
    /// Lowest price.
    #[serde(rename = "Low")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: f64,
    /// Traded volume, absent for some rows.
    #[serde(rename = "Volume", default)]
    pub volume: Option<f64>,
    /// Dividend paid that day.
    #[serde(rename = "Dividends", default)]
    pub dividends: Option<f64>,
    /// Split ratio, `0.0` on ordinary days.
    #[serde(rename = "Stock Splits", default)]
    pub stock_splits: Option<f64>,
}

impl Candle {
    /// Calendar day of the candle.
    pub fn day(&self) -> Result<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        Ok(NaiveDate::parse_from_str(day, DATE_FORMAT)?)
    }
}

/// Body of a 200 response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// Ticker echoed by the function.
    pub ticker: String,
    /// One candle per trading day.
    #[serde(default)]
    pub historical_data: Vec<Candle>,
}

/// Aggregate over the returned candles.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySummary {
    /// Ticker echoed by the function.
    pub ticker: String,
    /// Number of candles, including ones with an unparsable date.
    pub candles: usize,
    /// Earliest parsable candle date.
    pub first: Option<NaiveDate>,
    /// Latest parsable candle date.
    pub last: Option<NaiveDate>,
    /// Lowest `Low` over the range.
    pub low: Option<f64>,
    /// Highest `High` over the range.
    pub high: Option<f64>,
}

impl HistoryResponse {
    /// Decodes an already parsed JSON body.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Counts candles and finds the date span and price extremes.
    ///
    /// Candles with an unparsable date still count but do not move the span.
    pub fn summary(&self) -> HistorySummary {
        let dates: Vec<NaiveDate> = self
            .historical_data
            .iter()
            .filter_map(|c| c.day().ok())
            .collect();
        let low = self
            .historical_data
            .iter()
            .map(|c| c.low)
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |a| a.min(x))));
        let high = self
            .historical_data
            .iter()
            .map(|c| c.high)
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |a| a.max(x))));

        HistorySummary {
            ticker: self.ticker.clone(),
            candles: self.historical_data.len(),
            first: dates.iter().min().copied(),
            last: dates.iter().max().copied(),
            low,
            high,
        }
    }
}
