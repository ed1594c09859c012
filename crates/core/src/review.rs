//! Review records and difficulty levels.
//!
//! A review references its recipe by id only; reviews are never stored,
//! the store discards them after the simulated submission.

use serde::{Deserialize, Serialize};

use crate::types::{RecipeId, Timestamp};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Lowest accepted star rating.
pub const MIN_STARS: i32 = 1;

/// Highest accepted star rating.
pub const MAX_STARS: i32 = 5;

/// All valid difficulty labels, in display order.
pub const VALID_DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// How hard the reviewer found the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label. Matching is exact (`"Easy"`, not `"easy"`).
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Per-aspect star ratings, each in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatings {
    pub taste: u8,
    pub presentation: u8,
    pub instructions_clarity: u8,
}

/// A validated review, ready for the (mock) review sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub recipe_id: RecipeId,
    pub rating: u8,
    pub difficulty: Difficulty,
    pub would_make_again: bool,
    pub aspects: AspectRatings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    pub created_at: Timestamp,
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
