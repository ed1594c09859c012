//! Route definitions for the navigable pages and their forms.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{forms, pages, rating};
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET    /                              -> home
/// GET    /recipe/{id}                   -> recipe_detail
/// GET    /submit-recipe                 -> submit_recipe_page
/// POST   /submit-recipe                 -> submit_recipe
/// POST   /submit-recipe/validate        -> validate_recipe_field
/// GET    /recipe/{id}/review            -> review_page
/// POST   /recipe/{id}/review            -> submit_review
/// POST   /recipe/{id}/review/validate   -> validate_review_field
/// POST   /recipe/{id}/rating            -> rate_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/recipe/{id}", get(pages::recipe_detail))
        .route(
            "/submit-recipe",
            get(pages::submit_recipe_page).post(forms::submit_recipe),
        )
        .route("/submit-recipe/validate", post(forms::validate_recipe_field))
        .route(
            "/recipe/{id}/review",
            get(pages::review_page).post(forms::submit_review),
        )
        .route("/recipe/{id}/review/validate", post(forms::validate_review_field))
        .route("/recipe/{id}/rating", post(rating::rate_recipe))
}
