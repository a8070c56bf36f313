// ABOUTME: HTTP middleware shared by every route
// ABOUTME: CORS configuration for the browser client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Cross-origin resource sharing setup
pub mod cors;

pub use cors::setup_cors;
