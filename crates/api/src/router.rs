//! The Fake Bake router.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so a
//! request in a test passes through the same layers as one in production.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::pages;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request uuid, echoed back on the response.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Pages, forms, `/health` and the JSON API, wrapped in the middleware
/// stack and bound to `state`.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    with_middleware(site_routes(), config).with_state(state)
}

/// Route tree without middleware.
///
/// ```text
/// /health            liveness and seeded recipe count
/// /, /recipe/..      page views, review and rating forms
/// /submit-recipe..   recipe form
/// /api/v1/recipes..  JSON REST API
/// *                  not-found page
/// ```
fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .nest("/api/v1", routes::api_routes())
        .fallback(pages::not_found)
}

/// Layers run outermost first on the way in: CORS, request id assignment,
/// tracing, request id echo, timeout, then panic recovery around the handler.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(CatchPanicLayer::new())
        // Slow store latencies must stay below this.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS for the configured front-end origins.
///
/// Every route is a read or a form post, so only `GET` and `POST` with a
/// JSON body are allowed. An origin that does not parse aborts startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
