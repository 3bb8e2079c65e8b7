pub mod categories;
pub mod health;
pub mod recipes;
pub mod validation;

pub use categories::list_categories;
pub use health::health_check;
pub use recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
pub use validation::{parse_recipe_id, validate_recipe_payload};

use axum::{routing::get, Router};

use crate::AppState;

/// Build the API router with all endpoints attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/categories", get(list_categories))
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .with_state(state)
}
