//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values, so they
//! need no router.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use fakebake_api::error::AppError;
use fakebake_core::error::CoreError;
use fakebake_core::validation::FieldErrors;
use http_body_util::BodyExt;
use serde_json::json;
use validator::Validate;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Recipe",
        id: "42".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Recipe with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("unknown field".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "unknown field");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad star".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad star");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 409 with CONFLICT code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("already submitting".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: internal errors hide their details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_errors_are_sanitized() {
    for err in [
        AppError::Core(CoreError::Internal("sink exploded".into())),
        AppError::InternalError("secret detail".into()),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

// ---------------------------------------------------------------------------
// Test: InvalidForm maps to 422 and carries the field map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_form_returns_422_with_fields() {
    let mut fields = FieldErrors::new();
    fields.add("title", "Title must be at least 5 characters.");

    let (status, json) = error_to_response(AppError::InvalidForm(fields)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_FORM");
    assert_eq!(
        json["fields"],
        json!({ "title": ["Title must be at least 5 characters."] })
    );
}

// ---------------------------------------------------------------------------
// Test: validator errors convert into InvalidForm
// ---------------------------------------------------------------------------

#[derive(Validate)]
struct StarsInput {
    #[validate(range(min = 1, max = 5))]
    stars: u8,
}

#[test]
fn validator_errors_become_field_errors() {
    let errors = StarsInput { stars: 0 }.validate().unwrap_err();

    let fields = assert_matches!(AppError::from(errors), AppError::InvalidForm(f) => f);
    assert!(fields.contains("stars"));
    assert_eq!(fields.get("stars").map(<[String]>::len), Some(1));
}
