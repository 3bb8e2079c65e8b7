use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::constants::{MSG_RECIPE_CREATED, MSG_RECIPE_DELETED, MSG_RECIPE_UPDATED};
use crate::db::{recipes, RecipeQuery};
use crate::error::{AppError, Result};
use crate::models::{CreatedRecipe, MessageResponse, RecipeListParams, RecipePayload, RecipeRow};
use crate::routes::validation::{parse_recipe_id, validate_recipe_payload};
use crate::AppState;

/// List recipes, optionally filtered by free-text search and category
///
/// GET /api/recipes?search=&category_id=
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> Result<Json<Vec<RecipeRow>>> {
    let query = RecipeQuery::from(params);
    let rows = recipes::list_recipes(&state.db, &query).await?;

    tracing::debug!(
        "Listed {} recipes (search: {:?}, category: {:?})",
        rows.len(),
        query.search(),
        query.category_id()
    );

    Ok(Json(rows))
}

/// Fetch a single recipe with its category name
///
/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeRow>> {
    let id = parse_recipe_id(&id).ok_or(AppError::RecipeNotFound)?;

    let row = recipes::find_recipe(&state.db, id)
        .await?
        .ok_or(AppError::RecipeNotFound)?;

    Ok(Json(row))
}

/// Create a recipe
///
/// POST /api/recipes
///
/// Returns 201 with the new identifier. Required fields are checked before
/// anything touches the store.
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RecipePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedRecipe>)> {
    let Json(payload) = payload?;
    let recipe = validate_recipe_payload(payload)?;

    let id = recipes::insert_recipe(&state.db, &recipe).await?;

    tracing::info!("Recipe {} created: {}", id, recipe.title);

    Ok((
        StatusCode::CREATED,
        Json(CreatedRecipe {
            message: MSG_RECIPE_CREATED.to_string(),
            id,
        }),
    ))
}

/// Replace all fields of a recipe
///
/// PUT /api/recipes/:id
///
/// A missing recipe and an update that changes nothing are both reported as
/// 404 "not found or no changes made".
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<RecipePayload>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(payload) = payload?;
    let recipe = validate_recipe_payload(payload)?;
    let id = parse_recipe_id(&id).ok_or(AppError::RecipeNotFoundOrUnchanged)?;

    let changed = recipes::update_recipe(&state.db, id, &recipe).await?;
    if changed == 0 {
        tracing::info!("Update of recipe {} changed no rows", id);
        return Err(AppError::RecipeNotFoundOrUnchanged);
    }

    tracing::info!("Recipe {} updated", id);

    Ok(Json(MessageResponse {
        message: MSG_RECIPE_UPDATED.to_string(),
    }))
}

/// Delete a recipe
///
/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_recipe_id(&id).ok_or(AppError::RecipeNotFound)?;

    let removed = recipes::delete_recipe(&state.db, id).await?;
    if removed == 0 {
        return Err(AppError::RecipeNotFound);
    }

    tracing::info!("Recipe {} deleted", id);

    Ok(Json(MessageResponse {
        message: MSG_RECIPE_DELETED.to_string(),
    }))
}
