//! In-memory `RecipeSource` for view tests.

use std::cell::{Cell, RefCell};

use chrono::{Duration, TimeZone, Utc};
use reqwest::StatusCode;

use crate::client::{ClientError, ClientResult, RecipeSource};
use crate::codec;
use crate::constants::{
    ERR_MISSING_FIELDS, ERR_RECIPE_NOT_FOUND, ERR_RECIPE_NOT_FOUND_OR_UNCHANGED,
};
use crate::models::{
    Category, Ingredient, Instruction, RecipeDetail, RecipePayload, RecipeRow,
};
use crate::routes::validate_recipe_payload;

#[derive(Default)]
pub struct FakeSource {
    categories: Vec<Category>,
    rows: RefCell<Vec<RecipeRow>>,
    fail: Cell<bool>,
    pub created: RefCell<Vec<RecipePayload>>,
    pub updated: RefCell<Vec<(i64, RecipePayload)>>,
    pub deleted: RefCell<Vec<i64>>,
}

impl FakeSource {
    pub fn seeded() -> Self {
        let source = Self {
            categories: vec![
                Category {
                    id: 1,
                    name: "Makanan Utama".to_string(),
                },
                Category {
                    id: 2,
                    name: "Minuman".to_string(),
                },
            ],
            ..Default::default()
        };
        source.push_row(1, "Nasi Goreng", 1, &[Ingredient::new("Nasi", "2 piring")]);
        source.push_row(2, "Es Teh Manis", 2, &[Ingredient::new("Teh", "2 kantong")]);
        source.push_row(3, "Ayam Goreng", 1, &[Ingredient::new("Ayam", "1 ekor")]);
        source
    }

    pub fn push_row(&self, id: i64, title: &str, category_id: i64, ingredients: &[Ingredient]) {
        let category_name = self
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        self.rows.borrow_mut().push(RecipeRow {
            id,
            title: title.to_string(),
            description: Some(String::new()),
            ingredients: codec::encode(ingredients).unwrap(),
            instructions: codec::encode(&[Instruction::new("Masak")]).unwrap(),
            image_url: None,
            category_id,
            prep_time: None,
            cook_time: None,
            servings: None,
            difficulty: Some("Mudah".to_string()),
            created_at: base + Duration::minutes(id),
            category_name,
        });
    }

    pub fn replace_instructions(&self, id: i64, raw: &str) {
        if let Some(row) = self.rows.borrow_mut().iter_mut().find(|r| r.id == id) {
            row.instructions = raw.to_string();
        }
    }

    pub fn fail_requests(&self, fail: bool) {
        self.fail.set(fail);
    }

    fn check(&self) -> ClientResult<()> {
        if self.fail.get() {
            return Err(ClientError::Api {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("Server error".to_string()),
            });
        }
        Ok(())
    }

    fn reject_invalid(payload: &RecipePayload) -> ClientResult<()> {
        validate_recipe_payload(payload.clone())
            .map(|_| ())
            .map_err(|_| ClientError::Api {
                status: StatusCode::BAD_REQUEST,
                message: Some(ERR_MISSING_FIELDS.to_string()),
            })
    }

    fn not_found() -> ClientError {
        Self::not_found_with(ERR_RECIPE_NOT_FOUND)
    }

    fn not_found_with(message: &str) -> ClientError {
        ClientError::Api {
            status: StatusCode::NOT_FOUND,
            message: Some(message.to_string()),
        }
    }
}

impl RecipeSource for FakeSource {
    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn recipes(&self, search: &str, category_id: &str) -> ClientResult<Vec<RecipeRow>> {
        self.check()?;
        let search = search.to_lowercase();
        let mut rows: Vec<RecipeRow> = self
            .rows
            .borrow()
            .iter()
            .filter(|r| {
                search.is_empty()
                    || r.title.to_lowercase().contains(&search)
                    || r.ingredients.to_lowercase().contains(&search)
            })
            .filter(|r| category_id.is_empty() || r.category_id.to_string() == category_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn recipe(&self, id: i64) -> ClientResult<RecipeDetail> {
        self.check()?;
        let row = self
            .rows
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(Self::not_found)?;
        Ok(row.decode()?)
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> ClientResult<i64> {
        self.check()?;
        Self::reject_invalid(payload)?;
        self.created.borrow_mut().push(payload.clone());
        Ok(100 + self.created.borrow().len() as i64)
    }

    async fn update_recipe(&self, id: i64, payload: &RecipePayload) -> ClientResult<()> {
        self.check()?;
        Self::reject_invalid(payload)?;
        if !self.rows.borrow().iter().any(|r| r.id == id) {
            return Err(Self::not_found_with(ERR_RECIPE_NOT_FOUND_OR_UNCHANGED));
        }
        self.updated.borrow_mut().push((id, payload.clone()));
        Ok(())
    }

    async fn delete_recipe(&self, id: i64) -> ClientResult<()> {
        self.check()?;
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(Self::not_found());
        }
        self.deleted.borrow_mut().push(id);
        Ok(())
    }
}
