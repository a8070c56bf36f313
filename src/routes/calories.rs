// ABOUTME: Calorie and nutrition lookup route handlers
// ABOUTME: Thin axum handlers delegating to the NutritionLookup orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Calorie lookup routes
//!
//! All four endpoints take a JSON body and answer with the orchestrator's
//! result or an [`AppError`] body. A body that is not valid JSON for the
//! endpoint is rejected as invalid input rather than with axum's default
//! plain-text rejection.

use crate::errors::AppError;
use crate::models::{DishLookupRequest, FoodIdLookupRequest, FoodSearchRequest};
use crate::nutrition::NutritionLookup;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Calorie lookup routes handler
pub struct CalorieRoutes;

impl CalorieRoutes {
    /// Create all calorie lookup routes
    pub fn routes(lookup: Arc<NutritionLookup>) -> Router {
        Router::new()
            .route("/api/calories/get-calories", post(Self::handle_get_calories))
            .route("/api/calories/get-nutrition", post(Self::handle_get_nutrition))
            .route("/api/calories/search-foods", post(Self::handle_search_foods))
            .route(
                "/api/calories/get-nutrition-by-id",
                post(Self::handle_get_nutrition_by_id),
            )
            .with_state(lookup)
    }

    /// Handle POST /api/calories/get-calories
    async fn handle_get_calories(
        State(lookup): State<Arc<NutritionLookup>>,
        body: Result<Json<DishLookupRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(reject_body)?;
        let result = lookup.get_calories(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle POST /api/calories/get-nutrition
    async fn handle_get_nutrition(
        State(lookup): State<Arc<NutritionLookup>>,
        body: Result<Json<DishLookupRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(reject_body)?;
        let result = lookup.get_nutrition(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle POST /api/calories/search-foods
    async fn handle_search_foods(
        State(lookup): State<Arc<NutritionLookup>>,
        body: Result<Json<FoodSearchRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(reject_body)?;
        let result = lookup.search_foods(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }

    /// Handle POST /api/calories/get-nutrition-by-id
    async fn handle_get_nutrition_by_id(
        State(lookup): State<Arc<NutritionLookup>>,
        body: Result<Json<FoodIdLookupRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(reject_body)?;
        let result = lookup.get_nutrition_by_id(&request).await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
}
