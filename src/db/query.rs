use sqlx::{QueryBuilder, Sqlite};

use super::Db;
use crate::models::{RecipeListParams, RecipeRow};

/// Recipe columns joined with the category name. Shared by list and fetch.
pub(crate) const RECIPE_SELECT: &str = "SELECT r.id, r.title, r.description, r.ingredients, \
     r.instructions, r.image_url, r.category_id, r.prep_time, r.cook_time, r.servings, \
     r.difficulty, r.created_at, c.name AS category_name \
     FROM recipes r JOIN categories c ON r.category_id = c.id";

/// Filtered, newest-first read of recipes.
///
/// `search` matches the title or the serialized ingredients text as a
/// literal substring, ignoring case for any script. SQLite only folds ASCII
/// in `LIKE`, so the search runs over the rows the statement returns.
/// `category_id` is compared as received; the column's integer affinity
/// decides whether it matches. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    search: Option<String>,
    category_id: Option<String>,
}

impl RecipeQuery {
    pub fn new(search: Option<String>, category_id: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            category_id: category_id.filter(|s| !s.is_empty()),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Build the statement with its bound parameters
    pub fn builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(RECIPE_SELECT);
        builder.push(" WHERE 1=1");

        if let Some(category_id) = &self.category_id {
            builder
                .push(" AND r.category_id = ")
                .push_bind(category_id.clone());
        }

        builder.push(" ORDER BY r.created_at DESC, r.id DESC");
        builder
    }

    /// Whether a row passes the search filter
    pub fn matches(&self, row: &RecipeRow) -> bool {
        let Some(search) = &self.search else {
            return true;
        };
        let needle = search.to_lowercase();

        row.title.to_lowercase().contains(&needle)
            || row.ingredients.to_lowercase().contains(&needle)
    }

    /// Run the query against the store
    pub async fn fetch_all(&self, db: &Db) -> Result<Vec<RecipeRow>, sqlx::Error> {
        let mut builder = self.builder();
        tracing::debug!("Recipe query: {} (search: {:?})", builder.sql(), self.search);

        let mut conn = db.acquire().await?;
        let mut rows = builder
            .build_query_as::<RecipeRow>()
            .fetch_all(&mut *conn)
            .await?;

        rows.retain(|row| self.matches(row));
        Ok(rows)
    }
}

impl From<RecipeListParams> for RecipeQuery {
    fn from(params: RecipeListParams) -> Self {
        Self::new(params.search, params.category_id)
    }
}
