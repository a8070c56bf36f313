// ABOUTME: Route module organization for the Nutrilog HTTP endpoints
// ABOUTME: Groups route definitions by domain; handlers delegate to the lookup core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Calorie and nutrition lookup routes
pub mod calories;
/// Health check and readiness routes
pub mod health;

pub use calories::CalorieRoutes;
pub use health::HealthRoutes;
