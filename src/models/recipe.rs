use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;

/// One ingredient line, e.g. `{ "item": "Salt", "quantity": "1 tsp" }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
        }
    }
}

/// One preparation step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(default)]
    pub text: String,
}

impl Instruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Recipe row joined with its category name, as stored and as served.
///
/// `ingredients` and `instructions` hold the serialized text; call
/// [`RecipeRow::decode`] before using them as structured data.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
}

impl RecipeRow {
    /// Decode the serialized fields into a structured recipe
    pub fn decode(self) -> Result<RecipeDetail, serde_json::Error> {
        Ok(RecipeDetail {
            ingredients: codec::decode(&self.ingredients)?,
            instructions: codec::decode(&self.instructions)?,
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category_id: self.category_id,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            created_at: self.created_at,
            category_name: self.category_name,
        })
    }
}

/// Recipe with ingredients and instructions decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_name: String,
}

/// `category_id` as sent in a request body: a number, or a string from a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

/// Body of create and update requests, before presence validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<Instruction>>,
    pub image_url: Option<String>,
    pub category_id: Option<CategoryRef>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
}

/// A recipe that passed presence validation and is ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
}

/// Query string of `GET /api/recipes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListParams {
    pub search: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRecipe {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
