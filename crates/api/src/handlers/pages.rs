//! Handlers for the navigable pages.
//!
//! Each handler returns a page view model from [`crate::views`]. Unknown
//! recipe ids render the not-found page with a 404 status instead of an
//! error body, so clients always get something to show.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{HomePage, NotFoundPage, RecipePage, ReviewPage, SubmitRecipePage};

/// GET /
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let recipes = state.store.list_all().await;
    Json(DataResponse {
        data: HomePage::new(&recipes),
    })
}

/// GET /recipe/{id}
pub async fn recipe_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_by_id(&id).await {
        Some(recipe) => Json(DataResponse {
            data: RecipePage::new(recipe),
        })
        .into_response(),
        None => recipe_not_found(&id),
    }
}

/// GET /submit-recipe
pub async fn submit_recipe_page() -> impl IntoResponse {
    Json(DataResponse {
        data: SubmitRecipePage::new(),
    })
}

/// GET /recipe/{id}/review
pub async fn review_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_by_id(&id).await {
        Some(recipe) => Json(DataResponse {
            data: ReviewPage::new(&recipe),
        })
        .into_response(),
        None => recipe_not_found(&id),
    }
}

/// Fallback for every unmatched path.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(DataResponse {
            data: NotFoundPage::page(),
        }),
    )
        .into_response()
}

/// 404 response carrying the recipe not-found page.
pub(crate) fn recipe_not_found(id: &str) -> Response {
    tracing::debug!(recipe_id = %id, "Rendering recipe not-found page");
    (
        StatusCode::NOT_FOUND,
        Json(DataResponse {
            data: NotFoundPage::recipe(),
        }),
    )
        .into_response()
}
