//! Handler for committing a star rating on a recipe.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use fakebake_core::rating::{RatingEvent, StarRating, DEFAULT_TOTAL_STARS};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::recipe_not_found;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::RatingCommitted;

#[derive(Debug, Deserialize, Validate)]
pub struct RateRecipeRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5 stars."))]
    pub rating: u8,
}

/// POST /recipe/{id}/rating
///
/// Drive an interactive widget with a click on the requested star. The
/// rating is acknowledged with a notification and never stored.
pub async fn rate_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RateRecipeRequest>,
) -> AppResult<Response> {
    input.validate()?;

    let Some(recipe) = state.store.get_by_id(&id).await else {
        return Ok(recipe_not_found(&id));
    };

    let mut widget = StarRating::interactive(0, DEFAULT_TOTAL_STARS).on_commit({
        let recipe_id = recipe.id.clone();
        move |value| tracing::info!(recipe_id = %recipe_id, rating = value, "Recipe rated")
    });
    // The request was range-checked against the same star count.
    let rating = widget
        .handle(RatingEvent::Activate(input.rating))
        .ok_or_else(|| {
            AppError::InternalError(format!("Rating widget refused star {}", input.rating))
        })?;

    Ok(Json(DataResponse {
        data: RatingCommitted {
            recipe_id: recipe.id,
            rating,
            summary: widget.summary(),
            view: widget.view(),
            notifications: widget.take_notifications(),
        },
    })
    .into_response())
}
