// ABOUTME: Request parameter validation for nutrition lookups
// ABOUTME: Rejects missing text and non-positive servings before any upstream call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// Message for any servings value that is not a finite number above zero
pub const SERVINGS_MESSAGE: &str = "Servings must be a positive number";

/// Require a non-blank text field, returning it trimmed
///
/// # Errors
///
/// Returns `InvalidInput` with `message` if the value is absent or blank
pub fn require_text(value: Option<&str>, message: &str) -> AppResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(AppError::invalid_input(message)),
    }
}

/// Parse a servings value given as a JSON number or numeric string
///
/// # Errors
///
/// Returns `InvalidInput` if the value is absent, not numeric, not finite, or not above zero
pub fn parse_servings(value: Option<&Value>) -> AppResult<f64> {
    let servings = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    servings
        .filter(|s| s.is_finite() && *s > 0.0)
        .ok_or_else(|| AppError::invalid_input(SERVINGS_MESSAGE))
}

/// Parse an upstream food identifier given as a string or non-negative integer
///
/// # Errors
///
/// Returns `InvalidInput` if the value is absent, blank, or of another JSON type
pub fn parse_food_id(value: Option<&Value>) -> AppResult<String> {
    match value {
        Some(Value::String(text)) => require_text(Some(text), "Food ID is required"),
        Some(Value::Number(number)) => number
            .as_u64()
            .map(|id| id.to_string())
            .ok_or_else(|| AppError::invalid_input("Food ID must be a non-negative integer")),
        _ => Err(AppError::invalid_input("Food ID is required")),
    }
}
