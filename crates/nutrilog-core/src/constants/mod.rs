// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the cache layer and the USDA upstream provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Constants module
//!
//! Constants are grouped by the component that owns them rather than being
//! scattered through the code that reads them.

/// Cache-related constants (TTL, cleanup interval, key namespaces)
pub mod cache;
/// USDA `FoodData` Central endpoints, page sizes, and response defaults
pub mod usda;

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service binary
    pub const NUTRILOG_SERVER: &str = "nutrilog-server";
}

/// Listener and CORS defaults applied when the environment leaves them unset
pub mod defaults {
    /// Bind address for the HTTP listener
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// HTTP listener port
    pub const HTTP_PORT: u16 = 3000;
    /// Allowed CORS origin; `*` allows any
    pub const CLIENT_URL: &str = "*";
}
