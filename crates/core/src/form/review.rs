//! Review submission form.

use super::{FormController, FormSchema, SubmitOutcome};
use crate::error::CoreError;
use crate::notification::{Notification, REVIEW_NOTICE_MS};
use crate::review::Review;
use crate::sink::ReviewSink;
use crate::types::RecipeId;
use crate::validation::review::{validate_review, ReviewDraft, REVIEW_RULES};
use crate::validation::{FieldErrors, FieldInput, FieldRule};

/// Rules and copy for the review form of one recipe.
#[derive(Debug, Clone)]
pub struct ReviewSchema {
    pub recipe_id: RecipeId,
    pub recipe_title: String,
}

impl ReviewSchema {
    pub fn new(recipe_id: impl Into<RecipeId>, recipe_title: impl Into<String>) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            recipe_title: recipe_title.into(),
        }
    }
}

pub type ReviewForm = FormController<ReviewSchema>;

impl FormSchema for ReviewSchema {
    type Draft = ReviewDraft;
    type Output = Review;
    type Receipt = Review;

    fn name(&self) -> &'static str {
        "review"
    }

    fn rules(&self) -> &'static [FieldRule] {
        REVIEW_RULES
    }

    fn apply(&self, draft: &mut ReviewDraft, field: &str, input: FieldInput) -> Result<(), CoreError> {
        draft.apply(field, input)
    }

    fn missing_required(&self, draft: &ReviewDraft) -> Option<Notification> {
        if !draft.has_rating() {
            return Some(Notification::error(
                "Missing Rating",
                "Please provide an overall rating for this recipe.",
                REVIEW_NOTICE_MS,
            ));
        }
        if !draft.has_required_choices() {
            return Some(Notification::error(
                "Missing Information",
                "Please fill in all required fields.",
                REVIEW_NOTICE_MS,
            ));
        }
        None
    }

    fn validate(&self, draft: &ReviewDraft) -> Result<Review, FieldErrors> {
        validate_review(draft, &self.recipe_id)
    }

    fn success_notice(&self, _review: &Review) -> Notification {
        Notification::info(
            "Review Submitted!",
            format!(
                "Thank you for reviewing \"{}\"! Your fantastical feedback helps other bakers.",
                self.recipe_title
            ),
            REVIEW_NOTICE_MS,
        )
    }

    fn failure_notice(&self) -> Notification {
        Notification::error(
            "Oops!",
            "Something went wrong while submitting your review. Please try again.",
            REVIEW_NOTICE_MS,
        )
    }

    fn invalid_notice(&self) -> Notification {
        Notification::error(
            "Please Fix the Errors",
            "Some fields need your attention before submitting.",
            REVIEW_NOTICE_MS,
        )
    }
}

impl ReviewForm {
    /// Submit the draft to a review sink. The receipt echoes the review sent.
    pub async fn submit_to(&mut self, sink: &dyn ReviewSink) -> SubmitOutcome<Review> {
        self.submit(|review| async move {
            let echo = review.clone();
            sink.submit_review(review).await.map(|()| echo)
        })
        .await
    }
}
