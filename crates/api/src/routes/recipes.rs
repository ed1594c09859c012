//! Route definitions for the JSON recipe resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipes;
use crate::state::AppState;

/// Recipe routes mounted at `/recipes`.
///
/// ```text
/// GET    /          -> list_recipes
/// POST   /          -> create_recipe
/// GET    /{id}      -> get_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes).post(recipes::create_recipe))
        .route("/{id}", get(recipes::get_recipe))
}
