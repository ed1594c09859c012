//! Fake Bake domain core.
//!
//! Pure logic with no I/O: the recipe and review data model, field
//! validation, the form controller state machine, the star rating widget
//! and the notification outbox. Write accessors are reached through the
//! traits in [`sink`].

pub mod error;
pub mod form;
pub mod notification;
pub mod rating;
pub mod recipe;
pub mod review;
pub mod sink;
pub mod types;
pub mod validation;
