//! Form validation engine.
//!
//! Provides declarative field rules, a pure-logic evaluator, and the recipe
//! and review drafts the rules apply to.

pub mod evaluator;
pub mod recipe;
pub mod review;
pub mod rules;

pub use evaluator::{evaluate_field, evaluate_record, FieldSource};
pub use recipe::{validate_recipe, RecipeDraft, RECIPE_RULES};
pub use review::{validate_review, AspectDraft, ReviewDraft, REVIEW_RULES};
pub use rules::{FieldErrors, FieldInput, FieldRule, FieldValue, RuleKind};
