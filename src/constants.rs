// ABOUTME: Service constants re-exported from nutrilog-core
// ABOUTME: Cache namespaces, USDA nutrient codes, and listener defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

pub use nutrilog_core::constants::*;
