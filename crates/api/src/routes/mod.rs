pub mod health;
pub mod pages;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /recipes                 list, mock-create
/// /recipes/{id}            get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/recipes", recipes::router())
}
