/// Port the backend listens on unless PORT is set
pub const DEFAULT_PORT: u16 = 5000;

/// SQLite file used unless DATABASE_URL is set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://./data/recipes.db";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Base URL the frontend data client talks to by default
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Difficulty levels offered by the form. Not enforced server-side.
pub const DIFFICULTY_LEVELS: [&str; 3] = ["Mudah", "Sedang", "Sulit"];

pub const DEFAULT_DIFFICULTY: &str = "Mudah";

// =============================================================================
// Response Messages
// =============================================================================

pub const ERR_MISSING_FIELDS: &str =
    "Title, ingredients, instructions, and category_id are required.";

pub const ERR_INVALID_CATEGORY_ID: &str = "category_id must be an integer";

pub const ERR_RECIPE_NOT_FOUND: &str = "Recipe not found";

pub const ERR_RECIPE_NOT_FOUND_OR_UNCHANGED: &str = "Recipe not found or no changes made.";

pub const ERR_SERVER: &str = "Server error";

pub const MSG_RECIPE_CREATED: &str = "Recipe added successfully!";

pub const MSG_RECIPE_UPDATED: &str = "Recipe updated successfully!";

pub const MSG_RECIPE_DELETED: &str = "Recipe deleted successfully!";
