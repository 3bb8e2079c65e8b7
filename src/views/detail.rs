use crate::client::RecipeSource;
use crate::models::RecipeDetail;
use crate::views::messages;

/// State of the single-recipe page
#[derive(Debug, Clone)]
pub struct DetailView {
    id: i64,
    recipe: Option<RecipeDetail>,
    loading: bool,
    error: Option<String>,
    deleted: bool,
}

impl DetailView {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            recipe: None,
            loading: true,
            error: None,
            deleted: false,
        }
    }

    /// Load and decode the recipe
    pub async fn mount<S: RecipeSource>(&mut self, source: &S) {
        self.loading = true;
        match source.recipe(self.id).await {
            Ok(recipe) => self.recipe = Some(recipe),
            Err(e) => {
                tracing::error!("Failed to load recipe {}: {}", self.id, e);
                self.error = Some(messages::ERR_LOAD_DETAIL.to_string());
            }
        }
        self.loading = false;
    }

    /// Delete the recipe. Returns true once it is gone.
    pub async fn delete<S: RecipeSource>(&mut self, source: &S) -> bool {
        self.loading = true;
        let result = source.delete_recipe(self.id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.deleted = true;
                true
            }
            Err(e) => {
                tracing::error!("Failed to delete recipe {}: {}", self.id, e);
                self.error = Some(
                    e.server_message()
                        .unwrap_or(messages::ERR_DELETE)
                        .to_string(),
                );
                false
            }
        }
    }

    pub fn recipe(&self) -> Option<&RecipeDetail> {
        self.recipe.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
