// ABOUTME: Unified error handling re-exported from nutrilog-core
// ABOUTME: AppError, ErrorCode, and the HTTP error body shared by every module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

pub use nutrilog_core::errors::*;
