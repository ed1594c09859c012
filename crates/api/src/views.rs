//! Page view models.
//!
//! Every navigable page is served as JSON describing what to render: copy,
//! links, recipe data and pre-computed star rating views. Form pages carry
//! the empty draft so a client can render inputs without knowing defaults.

use fakebake_core::form::{FormController, FormSchema, FormState};
use fakebake_core::notification::Notification;
use fakebake_core::rating::{RatingView, StarRating, DEFAULT_TOTAL_STARS};
use fakebake_core::recipe::Recipe;
use fakebake_core::review::VALID_DIFFICULTIES;
use fakebake_core::validation::recipe::REQUIRED_RECIPE_FIELDS;
use fakebake_core::validation::{FieldErrors, RecipeDraft, ReviewDraft};
use serde::Serialize;

/* --------------------------------------------------------------------------
Links
-------------------------------------------------------------------------- */

pub const HOME_HREF: &str = "/";
pub const SUBMIT_RECIPE_HREF: &str = "/submit-recipe";

pub fn recipe_href(id: &str) -> String {
    format!("/recipe/{id}")
}

pub fn review_href(id: &str) -> String {
    format!("/recipe/{id}/review")
}

/* --------------------------------------------------------------------------
Recipe pages
-------------------------------------------------------------------------- */

/// One card on the home page.
#[derive(Debug, Serialize)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub href: String,
    pub rating: RatingView,
    pub rating_summary: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image_url: recipe.image_url.clone(),
            image_hint: recipe.image_hint.clone(),
            href: recipe_href(&recipe.id),
            rating: read_only_rating(recipe),
            rating_summary: recipe.rating_summary(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub headline: &'static str,
    pub intro: &'static str,
    pub section_title: &'static str,
    pub recipes: Vec<RecipeCard>,
    /// Set only when there is nothing to list.
    pub empty_message: Option<&'static str>,
}

impl HomePage {
    pub fn new(recipes: &[Recipe]) -> Self {
        Self {
            headline: "Welcome to Fake Bake!",
            intro: "Discover a world of fantastically fictional food. Browse our collection \
                    of imaginary recipes, rate your favorites, and even submit your own \
                    culinary creations (for fun, of course!).",
            section_title: "Featured Fakes",
            recipes: recipes.iter().map(RecipeCard::from).collect(),
            empty_message: recipes
                .is_empty()
                .then_some("No recipes found. Maybe bake some up?"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipePage {
    pub recipe: Recipe,
    pub rating: RatingView,
    pub rating_summary: String,
    pub review_href: String,
    pub submit_href: &'static str,
    pub back_href: &'static str,
}

impl RecipePage {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            rating: read_only_rating(&recipe),
            rating_summary: recipe.rating_summary(),
            review_href: review_href(&recipe.id),
            submit_href: SUBMIT_RECIPE_HREF,
            back_href: HOME_HREF,
            recipe,
        }
    }
}

/// Shown for unknown recipe ids and unknown routes.
#[derive(Debug, Serialize)]
pub struct NotFoundPage {
    pub title: &'static str,
    pub message: &'static str,
    pub back_href: &'static str,
    pub back_label: &'static str,
}

impl NotFoundPage {
    pub fn recipe() -> Self {
        Self {
            title: "Recipe Not Found",
            message: "Oops! We couldn't find the recipe you're looking for. \
                      It might have been eaten by a grue.",
            back_href: HOME_HREF,
            back_label: "Back to Recipes",
        }
    }

    pub fn page() -> Self {
        Self {
            title: "Page Not Found",
            message: "This page is as fictional as our recipes.",
            back_href: HOME_HREF,
            back_label: "Back to Recipes",
        }
    }
}

fn read_only_rating(recipe: &Recipe) -> RatingView {
    StarRating::from_average(recipe.average_rating(), DEFAULT_TOTAL_STARS).view()
}

/* --------------------------------------------------------------------------
Form pages
-------------------------------------------------------------------------- */

#[derive(Debug, Serialize)]
pub struct SubmitRecipePage {
    pub title: &'static str,
    pub description: &'static str,
    pub draft: RecipeDraft,
    pub required_fields: &'static [&'static str],
}

impl SubmitRecipePage {
    pub fn new() -> Self {
        Self {
            title: "Share Your Culinary Fantasy!",
            description: "Got a recipe that's too good (or too weird) to be true? Submit \
                          your fake bake here and let the world marvel at your imagination!",
            draft: RecipeDraft::default(),
            required_fields: REQUIRED_RECIPE_FIELDS,
        }
    }
}

impl Default for SubmitRecipePage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewPage {
    pub recipe_id: String,
    pub heading: &'static str,
    pub intro: &'static str,
    pub card_title: String,
    pub card_description: &'static str,
    pub draft: ReviewDraft,
    /// Interactive overall rating, starting unrated.
    pub rating: RatingView,
    pub difficulties: &'static [&'static str],
    pub back_href: String,
}

impl ReviewPage {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            heading: "Leave a Review",
            intro: "Share your thoughts on this fantastical recipe! \
                    (Remember, this is all pretend fun!)",
            card_title: format!("Review: {}", recipe.title),
            card_description: "Help other fantasy bakers with your honest (fake) feedback!",
            draft: ReviewDraft::default(),
            rating: StarRating::interactive(0, DEFAULT_TOTAL_STARS).view(),
            difficulties: VALID_DIFFICULTIES,
            back_href: recipe_href(&recipe.id),
        }
    }
}

/* --------------------------------------------------------------------------
Form results
-------------------------------------------------------------------------- */

/// State of a form after one submit attempt.
#[derive(Debug, Serialize)]
pub struct FormView<D, R> {
    pub state: FormState,
    pub errors: FieldErrors,
    pub notifications: Vec<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<R>,
    /// The draft after the attempt: reset on success, kept otherwise.
    pub draft: D,
}

impl<D, R> FormView<D, R> {
    /// Drain `form` into a view.
    pub fn drain<S>(form: &mut FormController<S>, receipt: Option<R>) -> Self
    where
        S: FormSchema<Draft = D, Receipt = R>,
        D: Clone,
    {
        Self {
            state: form.state(),
            errors: form.errors().clone(),
            notifications: form.take_notifications(),
            receipt,
            draft: form.draft().clone(),
        }
    }
}

/// Messages for one field after an incremental edit.
#[derive(Debug, Serialize)]
pub struct FieldCheck {
    pub field: String,
    pub errors: Vec<String>,
}

/// Result of committing a star rating.
#[derive(Debug, Serialize)]
pub struct RatingCommitted {
    pub recipe_id: String,
    pub rating: u8,
    pub summary: String,
    pub view: RatingView,
    pub notifications: Vec<Notification>,
}
