//! Write accessors a form hands its validated output to.
//!
//! The store implements these; tests substitute failing doubles to drive
//! the controller's failure path.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::recipe::{NewRecipe, SubmitReceipt};
use crate::review::Review;

/// Accepts new recipes.
#[async_trait]
pub trait RecipeSink: Send + Sync {
    async fn submit_recipe(&self, recipe: NewRecipe) -> Result<SubmitReceipt, CoreError>;
}

/// Accepts reviews.
#[async_trait]
pub trait ReviewSink: Send + Sync {
    async fn submit_review(&self, review: Review) -> Result<(), CoreError>;
}
