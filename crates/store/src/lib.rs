//! In-memory recipe store.
//!
//! [`RecipeStore`] holds the recipe list injected at construction and
//! simulates backend latency on every call. Nothing is ever written:
//! submissions are acknowledged and then dropped.

pub mod seed;

use std::time::Duration;

use async_trait::async_trait;
use fakebake_core::error::CoreError;
use fakebake_core::recipe::{NewRecipe, Recipe, SubmitReceipt};
use fakebake_core::review::Review;
use fakebake_core::sink::{RecipeSink, ReviewSink};

/// Message returned with every accepted recipe submission.
pub const SUBMIT_MESSAGE: &str =
    "Recipe submitted for whimsical review! (Not really, but thanks for playing!)";

/// Simulated delay per store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLatency {
    pub list: Duration,
    pub get: Duration,
    pub submit: Duration,
    pub review: Duration,
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
            submit: Duration::from_millis(1_000),
            review: Duration::from_millis(1_000),
        }
    }
}

impl StoreLatency {
    /// No delay at all, for tests.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            submit: Duration::ZERO,
            review: Duration::ZERO,
        }
    }
}

/// Read access to a fixed recipe list plus mock write accessors.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    latency: StoreLatency,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>, latency: StoreLatency) -> Self {
        Self { recipes, latency }
    }

    /// A store holding the built-in mock recipes.
    pub fn seeded(latency: StoreLatency) -> Self {
        Self::new(seed::mock_recipes(), latency)
    }

    pub fn latency(&self) -> StoreLatency {
        self.latency
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every recipe, in seed order.
    pub async fn list_all(&self) -> Vec<Recipe> {
        simulate(self.latency.list).await;
        tracing::debug!(count = self.recipes.len(), "Listed recipes");
        self.recipes.clone()
    }

    /// The recipe with `id`, or `None` when no such recipe exists.
    pub async fn get_by_id(&self, id: &str) -> Option<Recipe> {
        simulate(self.latency.get).await;
        let found = self.recipes.iter().find(|r| r.id == id).cloned();
        if found.is_none() {
            tracing::debug!(recipe_id = %id, "Recipe not found");
        }
        found
    }

    /// Acknowledge a new recipe without storing it.
    ///
    /// The receipt always reports success with a freshly generated id, but
    /// the recipe list is left untouched.
    pub async fn submit(&self, recipe: NewRecipe) -> SubmitReceipt {
        simulate(self.latency.submit).await;
        let id = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            recipe_id = %id,
            title = %recipe.title,
            ingredients = recipe.ingredients.len(),
            instructions = recipe.instructions.len(),
            "Recipe submitted (not persisted)"
        );
        SubmitReceipt {
            success: true,
            message: SUBMIT_MESSAGE.to_string(),
            id: Some(id),
        }
    }

    /// Acknowledge a review and discard it.
    pub async fn submit_review(&self, review: Review) {
        simulate(self.latency.review).await;
        tracing::info!(
            review_id = %review.id,
            recipe_id = %review.recipe_id,
            rating = review.rating,
            difficulty = review.difficulty.as_str(),
            "Review submitted (not persisted)"
        );
    }
}

#[async_trait]
impl RecipeSink for RecipeStore {
    async fn submit_recipe(&self, recipe: NewRecipe) -> Result<SubmitReceipt, CoreError> {
        Ok(self.submit(recipe).await)
    }
}

#[async_trait]
impl ReviewSink for RecipeStore {
    async fn submit_review(&self, review: Review) -> Result<(), CoreError> {
        RecipeStore::submit_review(self, review).await;
        Ok(())
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use fakebake_core::form::{RecipeForm, RecipeSchema, ReviewForm, ReviewSchema, SubmitOutcome};
    use fakebake_core::review::{AspectRatings, Difficulty};
    use fakebake_core::validation::{FieldInput, RecipeDraft};

    use super::*;

    fn store() -> RecipeStore {
        RecipeStore::seeded(StoreLatency::none())
    }

    #[tokio::test]
    async fn lists_seed_recipes_in_order() {
        let recipes = store().list_all().await;
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn get_by_id_finds_known_recipe() {
        let recipe = store().get_by_id("2").await.expect("seeded recipe");
        assert_eq!(recipe.title, "Zero-Gravity Chocolate Soufflé");
    }

    #[tokio::test]
    async fn get_by_id_signals_not_found() {
        assert_eq!(store().get_by_id("does-not-exist").await, None);
    }

    #[tokio::test]
    async fn submit_reports_success_without_storing() {
        let store = store();
        let receipt = store
            .submit(NewRecipe {
                title: "Cloud Bread".into(),
                description: "Bread made of actual clouds.".into(),
                ingredients: vec!["1 cloud".into()],
                instructions: vec!["Catch a cloud.".into()],
                prep_time: None,
                cook_time: None,
                servings: None,
            })
            .await;

        assert!(receipt.success);
        assert_eq!(receipt.message, SUBMIT_MESSAGE);
        assert!(!receipt.id.unwrap_or_default().is_empty());
        assert_eq!(store.list_all().await.len(), 3);
    }

    #[tokio::test]
    async fn generated_ids_are_unique() {
        let store = store();
        let new = || NewRecipe {
            title: "Twin Pies".into(),
            description: "Two of the same pie.".into(),
            ingredients: vec![],
            instructions: vec![],
            prep_time: None,
            cook_time: None,
            servings: None,
        };
        let a = store.submit(new()).await.id;
        let b = store.submit(new()).await.id;
        assert_ne!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn operations_wait_for_configured_latency() {
        let store = RecipeStore::seeded(StoreLatency::default());
        let started = tokio::time::Instant::now();
        store.get_by_id("1").await;
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn review_sink_accepts_and_discards() {
        let store = store();
        let review = Review {
            id: "r1".into(),
            recipe_id: "1".into(),
            rating: 5,
            difficulty: Difficulty::Easy,
            would_make_again: true,
            aspects: AspectRatings {
                taste: 5,
                presentation: 5,
                instructions_clarity: 5,
            },
            comment: None,
            reviewer_name: Some("Pat".into()),
            created_at: chrono::Utc::now(),
        };
        assert!(ReviewSink::submit_review(&store, review).await.is_ok());
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn recipe_form_round_trip_through_store() {
        let store = store();
        let mut form = RecipeForm::with_draft(
            RecipeSchema,
            RecipeDraft {
                title: "Invisible Pancakes".into(),
                description: "You will not see them coming.".into(),
                ingredients: "1 cup air\n2 eggs (hidden)".into(),
                instructions: "Flip carefully.\nServe to nobody.".into(),
                ..Default::default()
            },
        );

        let outcome = form.submit_to(&store).await;

        let receipt = assert_matches!(outcome, SubmitOutcome::Succeeded(r) => r);
        assert!(receipt.success);
        assert!(receipt.id.is_some_and(|id| !id.is_empty()));
        assert_eq!(form.draft(), &RecipeDraft::default());
        assert_eq!(form.take_notifications()[0].description, SUBMIT_MESSAGE);
    }

    #[tokio::test]
    async fn review_with_zero_rating_never_reaches_store() {
        let store = store();
        let mut form = ReviewForm::new(ReviewSchema::new("1", "Invisible Ink Lemonade Cookies"));
        form.edit("difficulty", FieldInput::Text("Easy".into())).unwrap();

        assert_matches!(form.submit_to(&store).await, SubmitOutcome::Blocked);
        assert_eq!(form.take_notifications()[0].title, "Missing Rating");
    }
}
