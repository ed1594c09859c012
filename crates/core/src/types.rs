/// Recipe identifiers are opaque strings (`"1"`, `"2"`, or a generated UUID).
pub type RecipeId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
