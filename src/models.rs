// ABOUTME: Request and response models re-exported from nutrilog-core
// ABOUTME: Serving-scaled nutrition results, search candidates, and lookup payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

pub use nutrilog_core::models::*;
