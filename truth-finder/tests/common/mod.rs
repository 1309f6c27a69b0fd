//! Shared helpers for truth-finder integration tests

#![allow(dead_code)]

use std::net::TcpListener;
use truth_finder::config::{ServiceConfig, TruthFinderConfig};
use wiremock::MockServer;

/// Configuration pointing at the mock server's /analyze route
pub fn config_for(server: &MockServer) -> TruthFinderConfig {
    config_with_endpoint(&format!("{}/analyze", server.uri()))
}

pub fn config_with_endpoint(endpoint: &str) -> TruthFinderConfig {
    TruthFinderConfig {
        service: Some(ServiceConfig {
            endpoint: Some(endpoint.to_string()),
            health_path: None,
            timeout_seconds: Some(5),
            headers: None,
        }),
    }
}

/// An endpoint on a local port nothing is listening on
pub fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/analyze", port)
}
