pub mod forms;
pub mod pages;
pub mod rating;
pub mod recipes;
