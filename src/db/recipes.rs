//! Store operations behind the recipe routes.
//!
//! Every function acquires one pooled connection, runs a single statement and
//! releases the connection when it goes out of scope.

use super::query::RECIPE_SELECT;
use super::{Db, RecipeQuery};
use crate::codec;
use crate::error::Result;
use crate::models::{Category, NewRecipe, RecipeRow};

pub async fn list_categories(db: &Db) -> Result<Vec<Category>> {
    let mut conn = db.acquire().await?;
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(categories)
}

pub async fn list_recipes(db: &Db, query: &RecipeQuery) -> Result<Vec<RecipeRow>> {
    Ok(query.fetch_all(db).await?)
}

/// Fetch one recipe joined with its category name
pub async fn find_recipe(db: &Db, id: i64) -> Result<Option<RecipeRow>> {
    let mut conn = db.acquire().await?;
    let sql = format!("{RECIPE_SELECT} WHERE r.id = ?");
    let row = sqlx::query_as::<_, RecipeRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Insert a recipe and return the identifier assigned by the store
pub async fn insert_recipe(db: &Db, recipe: &NewRecipe) -> Result<i64> {
    let ingredients = codec::encode(&recipe.ingredients)?;
    let instructions = codec::encode(&recipe.instructions)?;

    let mut conn = db.acquire().await?;
    let result = sqlx::query(
        "INSERT INTO recipes (title, description, ingredients, instructions, image_url, \
         category_id, prep_time, cook_time, servings, difficulty) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(ingredients)
    .bind(instructions)
    .bind(&recipe.image_url)
    .bind(recipe.category_id)
    .bind(&recipe.prep_time)
    .bind(&recipe.cook_time)
    .bind(&recipe.servings)
    .bind(&recipe.difficulty)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Replace every mutable field of a recipe.
///
/// Returns the number of rows changed. A row whose values already equal the
/// new ones is left untouched and counts as zero, same as a missing row.
pub async fn update_recipe(db: &Db, id: i64, recipe: &NewRecipe) -> Result<u64> {
    let ingredients = codec::encode(&recipe.ingredients)?;
    let instructions = codec::encode(&recipe.instructions)?;

    let mut conn = db.acquire().await?;
    let result = sqlx::query(
        "UPDATE recipes SET title = ?1, description = ?2, ingredients = ?3, instructions = ?4, \
         image_url = ?5, category_id = ?6, prep_time = ?7, cook_time = ?8, servings = ?9, \
         difficulty = ?10 \
         WHERE id = ?11 AND (title IS NOT ?1 OR description IS NOT ?2 \
         OR ingredients IS NOT ?3 OR instructions IS NOT ?4 OR image_url IS NOT ?5 \
         OR category_id IS NOT ?6 OR prep_time IS NOT ?7 OR cook_time IS NOT ?8 \
         OR servings IS NOT ?9 OR difficulty IS NOT ?10)",
    )
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(ingredients)
    .bind(instructions)
    .bind(&recipe.image_url)
    .bind(recipe.category_id)
    .bind(&recipe.prep_time)
    .bind(&recipe.cook_time)
    .bind(&recipe.servings)
    .bind(&recipe.difficulty)
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// Hard delete. Returns the number of rows removed.
pub async fn delete_recipe(db: &Db, id: i64) -> Result<u64> {
    let mut conn = db.acquire().await?;
    let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
