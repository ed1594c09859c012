//! Recipe records and the mock-submission payloads built from them.

use serde::{Deserialize, Serialize};

use crate::types::RecipeId;

/// Highest average rating a recipe can carry.
pub const MAX_AVERAGE_RATING: f32 = 5.0;

/// A recipe as served by the store.
///
/// Recipes come only from seed data and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Short keyword hint used for placeholder image generation.
    pub image_hint: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    pub num_ratings: u32,
}

impl Recipe {
    /// Average rating clamped into `[0, 5]`.
    pub fn average_rating(&self) -> f32 {
        self.rating.clamp(0.0, MAX_AVERAGE_RATING)
    }

    /// Human-readable rating line, e.g. `4.5 stars from 127 ratings`.
    pub fn rating_summary(&self) -> String {
        format!(
            "{:.1} stars from {} ratings",
            self.average_rating(),
            self.num_ratings
        )
    }
}

/// Normalized payload handed to the store when a recipe form submits.
///
/// Carries everything a [`Recipe`] has except the fields the backend would
/// assign: id, rating, rating count and image assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
}

/// Result of a mock submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
}

/// Split a multi-line text block into ordered lines, dropping blank ones.
///
/// Lines are kept verbatim apart from the blank-line filter, so
/// `"a\nb\n\nc\n"` becomes `["a", "b", "c"]`.
pub fn split_lines(block: &str) -> Vec<String> {
    block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_drops_blank_lines() {
        assert_eq!(split_lines("a\nb\n\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_lines_treats_whitespace_only_lines_as_blank() {
        assert_eq!(split_lines("  \n1 cup flour\n\t\n2 eggs"), vec![
            "1 cup flour",
            "2 eggs"
        ]);
    }

    #[test]
    fn split_lines_strips_carriage_returns() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_lines_of_empty_block_is_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn rating_summary_uses_one_decimal() {
        let recipe = Recipe {
            id: "1".into(),
            title: "Test".into(),
            description: "Test".into(),
            image_url: String::new(),
            image_hint: String::new(),
            ingredients: vec![],
            instructions: vec![],
            prep_time: None,
            cook_time: None,
            servings: None,
            rating: 4.0,
            num_ratings: 3,
        };
        assert_eq!(recipe.rating_summary(), "4.0 stars from 3 ratings");
    }
}
