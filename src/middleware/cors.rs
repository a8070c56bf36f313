// ABOUTME: CORS middleware configuration for the lookup API
// ABOUTME: Allows the configured web client origin, or any origin for "*"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use crate::config::HttpConfig;
use axum::http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the web client
///
/// `CLIENT_URL` may hold one origin or a comma-separated list. An empty value,
/// `*`, or a list with no parseable origin allows any origin.
///
/// ```bash
/// export CLIENT_URL="https://app.example.com,https://staging.example.com"
/// ```
pub fn setup_cors(config: &HttpConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.client_url))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn allowed_origins(client_url: &str) -> AllowOrigin {
    if client_url.trim().is_empty() || client_url.trim() == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = client_url
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
