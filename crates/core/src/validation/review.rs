//! Review submission draft and its rules.

use serde::{Deserialize, Serialize};

use super::evaluator::{evaluate_record, FieldSource};
use super::rules::{FieldErrors, FieldInput, FieldRule, FieldValue, RuleKind};
use crate::error::CoreError;
use crate::review::{
    AspectRatings, Difficulty, Review, MAX_STARS, MIN_STARS, VALID_DIFFICULTIES,
};
use crate::types::RecipeId;

pub const MIN_REVIEWER_NAME_LENGTH: usize = 2;
pub const MAX_REVIEWER_NAME_LENGTH: usize = 50;

const STARS: RuleKind = RuleKind::Range {
    min: MIN_STARS,
    max: MAX_STARS,
};

/// Rules for the review form. `comment` is free text and carries none.
pub const REVIEW_RULES: &[FieldRule] = &[
    FieldRule::new(
        "rating",
        STARS,
        "Please provide an overall rating between 1 and 5.",
    ),
    FieldRule::new(
        "difficulty",
        RuleKind::OneOf(VALID_DIFFICULTIES),
        "Difficulty must be one of: Easy, Medium, Hard",
    ),
    FieldRule::new(
        "would_make_again",
        RuleKind::Required,
        "Please tell us whether you would make this again.",
    ),
    FieldRule::new(
        "aspects.taste",
        STARS,
        "Taste rating must be between 1 and 5.",
    ),
    FieldRule::new(
        "aspects.presentation",
        STARS,
        "Presentation rating must be between 1 and 5.",
    ),
    FieldRule::new(
        "aspects.instructions_clarity",
        STARS,
        "Instructions Clarity rating must be between 1 and 5.",
    ),
    FieldRule::new(
        "reviewer_name",
        RuleKind::MinLength(MIN_REVIEWER_NAME_LENGTH),
        "Name must be at least 2 characters",
    ),
    FieldRule::new(
        "reviewer_name",
        RuleKind::MaxLength(MAX_REVIEWER_NAME_LENGTH),
        "Name must not exceed 50 characters",
    ),
];

/// Raw sub-rating values; `0` means "not rated yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectDraft {
    pub taste: i32,
    pub presentation: i32,
    pub instructions_clarity: i32,
}

/// Raw review form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewDraft {
    /// Overall stars; `0` means "not rated yet".
    pub rating: i32,
    /// Difficulty label; empty until chosen.
    pub difficulty: String,
    pub would_make_again: Option<bool>,
    pub aspects: AspectDraft,
    pub comment: String,
    pub reviewer_name: String,
}

impl ReviewDraft {
    pub fn has_rating(&self) -> bool {
        self.rating != 0
    }

    /// True when difficulty and "would make again" have both been answered.
    pub fn has_required_choices(&self) -> bool {
        !self.difficulty.trim().is_empty() && self.would_make_again.is_some()
    }

    /// Set one field from a raw input.
    pub fn apply(&mut self, field: &str, input: FieldInput) -> Result<(), CoreError> {
        match (field, input) {
            ("rating", FieldInput::Number(n)) => self.rating = n,
            ("aspects.taste", FieldInput::Number(n)) => self.aspects.taste = n,
            ("aspects.presentation", FieldInput::Number(n)) => self.aspects.presentation = n,
            ("aspects.instructions_clarity", FieldInput::Number(n)) => {
                self.aspects.instructions_clarity = n
            }
            ("difficulty", FieldInput::Text(s)) => self.difficulty = s,
            ("would_make_again", FieldInput::Flag(b)) => self.would_make_again = Some(b),
            ("comment", FieldInput::Text(s)) => self.comment = s,
            ("reviewer_name", FieldInput::Text(s)) => self.reviewer_name = s,
            (field, input) => {
                return Err(CoreError::Validation(format!(
                    "Cannot set review field '{field}' to {input:?}"
                )))
            }
        }
        Ok(())
    }
}

impl FieldSource for ReviewDraft {
    fn field_names() -> &'static [&'static str] {
        &[
            "rating",
            "reviewer_name",
            "difficulty",
            "would_make_again",
            "aspects.taste",
            "aspects.presentation",
            "aspects.instructions_clarity",
            "comment",
        ]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        Some(match field {
            "rating" => FieldValue::Number(self.rating),
            "difficulty" => FieldValue::Text(&self.difficulty),
            "would_make_again" => FieldValue::Flag(self.would_make_again),
            "aspects.taste" => FieldValue::Number(self.aspects.taste),
            "aspects.presentation" => FieldValue::Number(self.aspects.presentation),
            "aspects.instructions_clarity" => {
                FieldValue::Number(self.aspects.instructions_clarity)
            }
            "comment" => FieldValue::Text(&self.comment),
            // Measured as stored: surrounding whitespace is dropped on submit.
            "reviewer_name" => FieldValue::Text(self.reviewer_name.trim()),
            _ => return None,
        })
    }
}

/// Validate a whole draft and build the [`Review`] for `recipe_id`.
pub fn validate_review(draft: &ReviewDraft, recipe_id: &str) -> Result<Review, FieldErrors> {
    let errors = evaluate_record(REVIEW_RULES, draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Every value below passed its rule, so the conversions cannot fail.
    let stars = |n: i32| u8::try_from(n).unwrap_or_default();
    let Some(difficulty) = Difficulty::parse(&draft.difficulty) else {
        let mut errors = FieldErrors::new();
        errors.add("difficulty", "Difficulty must be one of: Easy, Medium, Hard");
        return Err(errors);
    };

    let comment = draft.comment.trim();
    let reviewer_name = draft.reviewer_name.trim();

    Ok(Review {
        id: uuid::Uuid::new_v4().to_string(),
        recipe_id: RecipeId::from(recipe_id),
        rating: stars(draft.rating),
        difficulty,
        would_make_again: draft.would_make_again.unwrap_or_default(),
        aspects: AspectRatings {
            taste: stars(draft.aspects.taste),
            presentation: stars(draft.aspects.presentation),
            instructions_clarity: stars(draft.aspects.instructions_clarity),
        },
        comment: (!comment.is_empty()).then(|| comment.to_string()),
        reviewer_name: (!reviewer_name.is_empty()).then(|| reviewer_name.to_string()),
        created_at: chrono::Utc::now(),
    })
}
