//! The probe itself: send one request, print the report.
use std::io::Write;

use history_common::history::HistoryResponse;
use history_common::render::render;
use history_common::{Body, HistoryRequest, ResponseEnvelope, Result};
use log::{debug, info};

use crate::client::HistoryClient;

/// Posts `request` through `client` and writes the report to `out`.
///
/// A transport fault is returned before anything is written. A non-200
/// status or an undecodable body is reported on `out` and is not an error.
pub fn run<W: Write>(client: &HistoryClient, request: &HistoryRequest, out: &mut W) -> Result<()> {
    let response = client.send(request)?;
    render(out, &response)?;
    if response.is_ok() {
        log_summary(&response);
    }
    Ok(())
}

fn log_summary(response: &ResponseEnvelope) {
    let Body::Json(value) = response.body() else {
        return;
    };
    match HistoryResponse::from_value(&value) {
        Ok(history) => {
            let summary = history.summary();
            info!(
                "{}: {} candles from {} to {}, low={} high={}",
                summary.ticker,
                summary.candles,
                summary.first.map_or_else(|| "-".to_string(), |d| d.to_string()),
                summary.last.map_or_else(|| "-".to_string(), |d| d.to_string()),
                summary.low.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p)),
                summary.high.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p)),
            );
        }
        Err(e) => debug!("Body is not a history payload: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{refused_url, serve_once, test_client};

    fn probe(response: &'static str) -> String {
        let (url, server) = serve_once(response);
        let client = test_client(&url);
        let mut out = Vec::new();
        run(&client, &HistoryRequest::fixed().unwrap(), &mut out).unwrap();
        server.join().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn history_payload_is_printed_in_full() {
        let out = probe(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 98\r\nConnection: close\r\n\r\n\
             {\"ticker\":\"AAPL\",\"historicalData\":[{\"Date\":\"2023-01-03\",\"Open\":1,\"High\":2,\"Low\":0.5,\"Close\":1.5}]}",
        );
        assert!(out.starts_with("Status: 200\n\n--- Response Headers ---\n"));
        assert!(out.contains("content-type: application/json\n"));
        assert!(out.contains("Response received (full JSON object):\n{\n  \"ticker\": \"AAPL\",\n  \"historicalData\": [\n"));
    }

    #[test]
    fn not_found_json_is_reported() {
        let out = probe(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 21\r\nConnection: close\r\n\r\n{\"error\":\"not found\"}",
        );
        assert!(out.starts_with("Status: 404\n"));
        assert!(out.ends_with("Error Response (404):\n{\n  \"error\": \"not found\"\n}\n"));
    }

    #[test]
    fn server_error_text_is_reported() {
        let out = probe(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 21\r\nConnection: close\r\n\r\nInternal Server Error",
        );
        assert!(out.ends_with("Error Response (500):\nInternal Server Error\n"));
    }

    #[test]
    fn transport_fault_writes_nothing() {
        let client = test_client(&refused_url());
        let mut out = Vec::new();
        let result = run(&client, &HistoryRequest::fixed().unwrap(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
