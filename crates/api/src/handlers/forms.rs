//! Handlers for the recipe and review forms.
//!
//! Each request builds a fresh form controller from the posted draft, runs
//! one edit or submit through it and returns what the controller produced.
//! Form outcomes are values, so blocked and invalid submits come back as a
//! `422` carrying the form view rather than an error body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fakebake_core::error::CoreError;
use fakebake_core::form::{
    FormController, FormSchema, RecipeForm, RecipeSchema, ReviewForm, ReviewSchema, SubmitOutcome,
};
use fakebake_core::validation::{FieldInput, RecipeDraft, ReviewDraft};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::pages::recipe_not_found;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{FieldCheck, FormView};

/// Body of the incremental validation endpoints.
#[derive(Debug, Deserialize)]
pub struct RecipeFieldEdit {
    /// Current draft before the edit.
    #[serde(default)]
    pub draft: RecipeDraft,
    pub field: String,
    pub value: FieldInput,
}

#[derive(Debug, Deserialize)]
pub struct ReviewFieldEdit {
    #[serde(default)]
    pub draft: ReviewDraft,
    pub field: String,
    pub value: FieldInput,
}

// ---------------------------------------------------------------------------
// Recipe form
// ---------------------------------------------------------------------------

/// POST /submit-recipe
pub async fn submit_recipe(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Response {
    let mut form = RecipeForm::with_draft(RecipeSchema, draft);
    let outcome = form.submit_to(&*state.store).await;

    tracing::info!(
        state = ?form.state(),
        invalid_fields = form.errors().len(),
        "Recipe form submitted"
    );

    form_response(&mut form, outcome)
}

/// POST /submit-recipe/validate
pub async fn validate_recipe_field(Json(edit): Json<RecipeFieldEdit>) -> AppResult<impl IntoResponse> {
    let mut form = RecipeForm::with_draft(RecipeSchema, edit.draft);
    let errors = form.edit(&edit.field, edit.value)?.to_vec();

    Ok(Json(DataResponse {
        data: FieldCheck {
            field: edit.field,
            errors,
        },
    }))
}

// ---------------------------------------------------------------------------
// Review form
// ---------------------------------------------------------------------------

/// POST /recipe/{id}/review
pub async fn submit_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ReviewDraft>,
) -> Response {
    let Some(recipe) = state.store.get_by_id(&id).await else {
        return recipe_not_found(&id);
    };

    let mut form = ReviewForm::with_draft(ReviewSchema::new(recipe.id, recipe.title), draft);
    let outcome = form.submit_to(&*state.store).await;

    tracing::info!(
        recipe_id = %id,
        state = ?form.state(),
        invalid_fields = form.errors().len(),
        "Review form submitted"
    );

    form_response(&mut form, outcome)
}

/// POST /recipe/{id}/review/validate
pub async fn validate_review_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(edit): Json<ReviewFieldEdit>,
) -> AppResult<Response> {
    let Some(recipe) = state.store.get_by_id(&id).await else {
        return Ok(recipe_not_found(&id));
    };

    let mut form = ReviewForm::with_draft(ReviewSchema::new(recipe.id, recipe.title), edit.draft);
    let errors = form.edit(&edit.field, edit.value)?.to_vec();

    Ok(Json(DataResponse {
        data: FieldCheck {
            field: edit.field,
            errors,
        },
    })
    .into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Turn a submit outcome into a response carrying the drained form view.
///
/// A submission already in flight is a conflict and gets the standard error
/// body; every other outcome returns the form view. A sink that declined or
/// failed is reported as `502`: the form itself was fine, the backend behind
/// it was not.
fn form_response<S>(form: &mut FormController<S>, outcome: SubmitOutcome<S::Receipt>) -> Response
where
    S: FormSchema,
    S::Draft: serde::Serialize,
    S::Receipt: serde::Serialize,
{
    let status = match &outcome {
        SubmitOutcome::Busy => {
            return AppError::Core(CoreError::Conflict(format!(
                "A {} submission is already in progress",
                form.schema().name()
            )))
            .into_response();
        }
        SubmitOutcome::Succeeded(_) => StatusCode::OK,
        SubmitOutcome::Blocked | SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };

    let receipt = match outcome {
        SubmitOutcome::Succeeded(receipt) => Some(receipt),
        SubmitOutcome::Failed { receipt } => receipt,
        SubmitOutcome::Busy | SubmitOutcome::Blocked | SubmitOutcome::Invalid(_) => None,
    };
    let view = FormView::drain(form, receipt);
    (status, Json(DataResponse { data: view })).into_response()
}

#[cfg(test)]
mod tests {
    use fakebake_core::recipe::SubmitReceipt;
    use fakebake_core::validation::FieldErrors;
    use http_body_util::BodyExt;

    use super::*;

    async fn respond(outcome: SubmitOutcome<SubmitReceipt>) -> (StatusCode, serde_json::Value) {
        let mut form = RecipeForm::new(RecipeSchema);
        let response = form_response(&mut form, outcome);
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn receipt(success: bool) -> SubmitReceipt {
        SubmitReceipt {
            success,
            message: "noted".into(),
            id: Some("abc".into()),
        }
    }

    #[tokio::test]
    async fn busy_submission_is_a_conflict() {
        let (status, json) = respond(SubmitOutcome::Busy).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "CONFLICT");
        assert_eq!(json["error"], "A recipe submission is already in progress");
    }

    #[tokio::test]
    async fn outcome_statuses() {
        assert_eq!(respond(SubmitOutcome::Succeeded(receipt(true))).await.0, StatusCode::OK);
        assert_eq!(respond(SubmitOutcome::Blocked).await.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            respond(SubmitOutcome::Invalid(FieldErrors::new())).await.0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            respond(SubmitOutcome::Failed { receipt: None }).await.0,
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn declined_receipt_is_kept() {
        let (status, json) = respond(SubmitOutcome::Failed {
            receipt: Some(receipt(false)),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["data"]["receipt"]["success"], false);
    }
}
