//! Endpoint and payload constants.
//!
//! The probe has no runtime configuration; every parameter of the request lives here.

/// Cloud Run function serving historical prices with indicators.
pub const FUNCTION_URL: &str = "https://get-historical-data-with-indicators-ugz5lcdyca-uc.a.run.app";
/// Ticker requested by the probe.
pub const DEFAULT_TICKER: &str = "AAPL";
/// First day of the requested range (inclusive).
pub const DEFAULT_START_DATE: &str = "2023-01-01";
/// Last day of the requested range.
pub const DEFAULT_END_DATE: &str = "2023-10-01";
/// Format of every date on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
