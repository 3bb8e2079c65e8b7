use axum::extract::rejection::JsonRejection;

use crate::constants::ERR_INVALID_CATEGORY_ID;
use crate::error::{AppError, Result};
use crate::models::{CategoryRef, NewRecipe, RecipePayload};

/// Presence check for create and update bodies.
///
/// Title, ingredients, instructions and category_id must be present and
/// non-empty; a numeric category_id of 0 counts as absent. Nothing else is
/// checked: the content of each ingredient or instruction and the existence
/// of the category are left to the store.
pub fn validate_recipe_payload(payload: RecipePayload) -> Result<NewRecipe> {
    let title = payload.title.filter(|t| !t.is_empty());
    let ingredients = payload.ingredients.filter(|v| !v.is_empty());
    let instructions = payload.instructions.filter(|v| !v.is_empty());
    let category = payload.category_id.filter(|c| match c {
        CategoryRef::Id(id) => *id != 0,
        CategoryRef::Text(s) => !s.trim().is_empty(),
    });

    let (Some(title), Some(ingredients), Some(instructions), Some(category)) =
        (title, ingredients, instructions, category)
    else {
        return Err(AppError::MissingFields);
    };

    let category_id = match category {
        CategoryRef::Id(id) => id,
        CategoryRef::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput(ERR_INVALID_CATEGORY_ID.to_string()))?,
    };

    Ok(NewRecipe {
        title,
        description: payload.description,
        ingredients,
        instructions,
        image_url: payload.image_url,
        category_id,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        servings: payload.servings,
        difficulty: payload.difficulty,
    })
}

/// Path identifiers that are not integers can never match a row
pub fn parse_recipe_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::InvalidInput(rejection.body_text())
    }
}
