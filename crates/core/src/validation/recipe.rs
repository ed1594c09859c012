//! Recipe submission draft and its rules.

use serde::{Deserialize, Serialize};

use super::evaluator::{evaluate_record, FieldSource};
use super::rules::{FieldErrors, FieldInput, FieldRule, FieldValue, RuleKind};
use crate::error::CoreError;
use crate::recipe::{split_lines, NewRecipe};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MIN_INGREDIENTS_LENGTH: usize = 10;
pub const MIN_INSTRUCTIONS_LENGTH: usize = 20;

/// Fields that must be non-blank before a recipe can be submitted.
pub const REQUIRED_RECIPE_FIELDS: &[&str] = &["title", "description", "ingredients", "instructions"];

/// Rules for the recipe form. Optional text fields carry no rules.
pub const RECIPE_RULES: &[FieldRule] = &[
    FieldRule::new(
        "title",
        RuleKind::MinLength(MIN_TITLE_LENGTH),
        "Title must be at least 5 characters.",
    ),
    FieldRule::new(
        "title",
        RuleKind::MaxLength(MAX_TITLE_LENGTH),
        "Title must not exceed 100 characters.",
    ),
    FieldRule::new(
        "description",
        RuleKind::MinLength(MIN_DESCRIPTION_LENGTH),
        "Description must be at least 10 characters.",
    ),
    FieldRule::new(
        "description",
        RuleKind::MaxLength(MAX_DESCRIPTION_LENGTH),
        "Description must not exceed 500 characters.",
    ),
    FieldRule::new(
        "ingredients",
        RuleKind::MinLength(MIN_INGREDIENTS_LENGTH),
        "Please list at least one ingredient (min 10 characters total).",
    ),
    FieldRule::new(
        "instructions",
        RuleKind::MinLength(MIN_INSTRUCTIONS_LENGTH),
        "Instructions must be at least 20 characters.",
    ),
];

/* --------------------------------------------------------------------------
Draft
-------------------------------------------------------------------------- */

/// Raw recipe form values. Ingredients and instructions are one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
}

impl RecipeDraft {
    /// Names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_RECIPE_FIELDS
            .iter()
            .copied()
            .filter(|field| {
                matches!(self.field_value(field), Some(FieldValue::Text(s)) if s.trim().is_empty())
            })
            .collect()
    }

    /// Set one field from a raw input. Every recipe field is text.
    pub fn apply(&mut self, field: &str, input: FieldInput) -> Result<(), CoreError> {
        let FieldInput::Text(value) = input else {
            return Err(CoreError::Validation(format!(
                "Field '{field}' expects a text value"
            )));
        };
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "ingredients" => &mut self.ingredients,
            "instructions" => &mut self.instructions,
            "prep_time" => &mut self.prep_time,
            "cook_time" => &mut self.cook_time,
            "servings" => &mut self.servings,
            other => {
                return Err(CoreError::Validation(format!(
                    "Unknown recipe field '{other}'"
                )))
            }
        };
        *slot = value;
        Ok(())
    }
}

impl FieldSource for RecipeDraft {
    fn field_names() -> &'static [&'static str] {
        &[
            "title",
            "description",
            "prep_time",
            "cook_time",
            "servings",
            "ingredients",
            "instructions",
        ]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value = match field {
            "title" => &self.title,
            "description" => &self.description,
            "ingredients" => &self.ingredients,
            "instructions" => &self.instructions,
            "prep_time" => &self.prep_time,
            "cook_time" => &self.cook_time,
            "servings" => &self.servings,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }
}

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Validate a whole draft and build the normalized [`NewRecipe`].
pub fn validate_recipe(draft: &RecipeDraft) -> Result<NewRecipe, FieldErrors> {
    let errors = evaluate_record(RECIPE_RULES, draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewRecipe {
        title: draft.title.clone(),
        description: draft.description.clone(),
        ingredients: split_lines(&draft.ingredients),
        instructions: split_lines(&draft.instructions),
        prep_time: non_blank(&draft.prep_time),
        cook_time: non_blank(&draft.cook_time),
        servings: non_blank(&draft.servings),
    })
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
