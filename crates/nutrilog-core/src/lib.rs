// ABOUTME: Core types and constants for the Nutrilog nutrition lookup service
// ABOUTME: Foundation crate with error handling, constants, and nutrition data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types and constants for the Nutrilog
//! nutrition lookup service. It changes rarely, which keeps incremental builds
//! of the server crate cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the HTTP error body
//! - **constants**: cache and upstream constants organized by domain
//! - **models**: nutrient records, response shapes, and request payloads

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models and request payloads
pub mod models;
