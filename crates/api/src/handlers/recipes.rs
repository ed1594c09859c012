//! Handlers for the `/api/v1/recipes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fakebake_core::error::CoreError;
use fakebake_core::validation::{validate_recipe, RecipeDraft};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/recipes
pub async fn list_recipes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = state.store.list_all().await;

    Ok(Json(DataResponse { data: recipes }))
}

/// GET /api/v1/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let recipe = state
        .store
        .get_by_id(&id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;

    Ok(Json(DataResponse { data: recipe }))
}

/// POST /api/v1/recipes
///
/// Validate a raw recipe draft and mock-submit it. The receipt reports
/// success, but the recipe list does not change.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> AppResult<impl IntoResponse> {
    let recipe = validate_recipe(&draft).map_err(AppError::InvalidForm)?;
    let receipt = state.store.submit(recipe).await;

    tracing::info!(recipe_id = ?receipt.id, "Recipe created via API");

    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}
