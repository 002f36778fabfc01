//! One-shot HTTP server for tests.
//!
//! Accepts a single TCP connection, reads one request (headers plus a
//! `Content-Length` body), answers with a canned response and hands the raw
//! request text back through the join handle.
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::client::HistoryClient;

/// Starts the server and returns its base URL.
pub fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
    serve_after(response, Duration::ZERO)
}

/// Like [`serve_once`], but waits `delay` after reading the request before answering.
pub fn serve_after(response: &'static str, delay: Duration) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        let mut content_length = 0usize;

        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if let Some((name, value)) = line.split_once(':') {
                if name.trim().eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            request.push_str(&line);
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();
        request.push_str(&String::from_utf8_lossy(&body));

        thread::sleep(delay);
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (format!("http://{}/", addr), handle)
}

/// URL of a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

/// Client that never goes through an environment proxy.
pub fn test_client(url: &str) -> HistoryClient {
    HistoryClient::from_builder(url, Client::builder().no_proxy()).unwrap()
}
