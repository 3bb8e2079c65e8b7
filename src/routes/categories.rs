use axum::{extract::State, Json};

use crate::db::recipes;
use crate::error::Result;
use crate::models::Category;
use crate::AppState;

/// List every category
///
/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = recipes::list_categories(&state.db).await?;
    Ok(Json(categories))
}
