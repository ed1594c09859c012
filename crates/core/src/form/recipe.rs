//! Recipe submission form.

use super::{FormController, FormSchema, SubmitOutcome};
use crate::error::CoreError;
use crate::notification::{Notification, RECIPE_NOTICE_MS};
use crate::recipe::{NewRecipe, SubmitReceipt};
use crate::sink::RecipeSink;
use crate::validation::recipe::{validate_recipe, RecipeDraft, RECIPE_RULES};
use crate::validation::{FieldErrors, FieldInput, FieldRule};

const DEFAULT_SUCCESS_MESSAGE: &str =
    "Your fantastical recipe is now part of the Fake Bake legend (almost!).";

const DEFAULT_DECLINED_MESSAGE: &str =
    "Something went wrong with your recipe submission. Please try again.";

/// Rules and copy for the "submit a recipe" form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeSchema;

pub type RecipeForm = FormController<RecipeSchema>;

impl FormSchema for RecipeSchema {
    type Draft = RecipeDraft;
    type Output = NewRecipe;
    type Receipt = SubmitReceipt;

    fn name(&self) -> &'static str {
        "recipe"
    }

    fn rules(&self) -> &'static [FieldRule] {
        RECIPE_RULES
    }

    fn apply(&self, draft: &mut RecipeDraft, field: &str, input: FieldInput) -> Result<(), CoreError> {
        draft.apply(field, input)
    }

    fn missing_required(&self, draft: &RecipeDraft) -> Option<Notification> {
        let missing = draft.missing_fields();
        if missing.is_empty() {
            return None;
        }
        Some(Notification::error(
            "Missing Information",
            format!(
                "Please fill in all required fields: {}.",
                missing.join(", ")
            ),
            RECIPE_NOTICE_MS,
        ))
    }

    fn validate(&self, draft: &RecipeDraft) -> Result<NewRecipe, FieldErrors> {
        validate_recipe(draft)
    }

    fn is_accepted(&self, receipt: &SubmitReceipt) -> bool {
        receipt.success
    }

    fn success_notice(&self, receipt: &SubmitReceipt) -> Notification {
        Notification::info(
            "Recipe Submitted!",
            message_or(&receipt.message, DEFAULT_SUCCESS_MESSAGE),
            RECIPE_NOTICE_MS,
        )
    }

    fn rejected_notice(&self, receipt: &SubmitReceipt) -> Notification {
        Notification::error(
            "Oh Crumbs!",
            message_or(&receipt.message, DEFAULT_DECLINED_MESSAGE),
            RECIPE_NOTICE_MS,
        )
    }

    fn failure_notice(&self) -> Notification {
        Notification::error(
            "Error",
            "An unexpected error occurred. Please try again later.",
            RECIPE_NOTICE_MS,
        )
    }
}

impl RecipeForm {
    /// Submit the draft to a recipe sink (normally the store).
    pub async fn submit_to(&mut self, sink: &dyn RecipeSink) -> SubmitOutcome<SubmitReceipt> {
        self.submit(|recipe| sink.submit_recipe(recipe)).await
    }
}

fn message_or(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}
