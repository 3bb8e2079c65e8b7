use thiserror::Error;

use crate::client::{ClientError, RecipeSource};
use crate::constants::{DEFAULT_DIFFICULTY, DIFFICULTY_LEVELS};
use crate::models::{Category, CategoryRef, Ingredient, Instruction, RecipeDetail, RecipePayload};
use crate::views::messages;

/// Create a new recipe or edit an existing one, decided at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("{}", messages::ERR_EMPTY_STEPS)]
    EmptySteps,
}

/// Editable form fields. Everything is text, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub image_url: String,
    pub category_id: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: vec![Ingredient::default()],
            instructions: vec![Instruction::default()],
            image_url: String::new(),
            category_id: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }
}

impl RecipeForm {
    /// Prefill from a decoded recipe. Empty lists get one blank row.
    pub fn from_detail(detail: RecipeDetail) -> Self {
        let mut form = Self {
            title: detail.title,
            description: detail.description.unwrap_or_default(),
            ingredients: detail.ingredients,
            instructions: detail.instructions,
            image_url: detail.image_url.unwrap_or_default(),
            category_id: detail.category_id.to_string(),
            prep_time: detail.prep_time.unwrap_or_default(),
            cook_time: detail.cook_time.unwrap_or_default(),
            servings: detail.servings.unwrap_or_default(),
            difficulty: detail.difficulty.unwrap_or_default(),
        };
        if form.ingredients.is_empty() {
            form.ingredients.push(Ingredient::default());
        }
        if form.instructions.is_empty() {
            form.instructions.push(Instruction::default());
        }
        form
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::default());
    }

    /// Remove a row; the list never drops below one blank row
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
        if self.ingredients.is_empty() {
            self.ingredients.push(Ingredient::default());
        }
    }

    pub fn add_instruction(&mut self) {
        self.instructions.push(Instruction::default());
    }

    pub fn remove_instruction(&mut self, index: usize) {
        if index < self.instructions.len() {
            self.instructions.remove(index);
        }
        if self.instructions.is_empty() {
            self.instructions.push(Instruction::default());
        }
    }

    /// Build the request body.
    ///
    /// Ingredients need both item and quantity, instructions need text; rows
    /// missing them are dropped. Refuses if either list ends up empty.
    pub fn to_payload(&self) -> Result<RecipePayload, FormError> {
        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|i| !i.item.is_empty() && !i.quantity.is_empty())
            .cloned()
            .collect();
        let instructions: Vec<Instruction> = self
            .instructions
            .iter()
            .filter(|i| !i.text.is_empty())
            .cloned()
            .collect();

        if ingredients.is_empty() || instructions.is_empty() {
            return Err(FormError::EmptySteps);
        }

        Ok(RecipePayload {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            ingredients: Some(ingredients),
            instructions: Some(instructions),
            image_url: Some(self.image_url.clone()),
            // Unparsable ids are sent as absent and rejected by the server
            category_id: self.category_id.trim().parse().ok().map(CategoryRef::Id),
            prep_time: Some(self.prep_time.clone()),
            cook_time: Some(self.cook_time.clone()),
            servings: Some(self.servings.clone()),
            difficulty: Some(self.difficulty.clone()),
        })
    }
}

/// State of the create/edit form page
#[derive(Debug, Clone)]
pub struct FormView {
    mode: FormMode,
    form: RecipeForm,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
    saved_id: Option<i64>,
}

impl FormView {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            form: RecipeForm::default(),
            categories: Vec::new(),
            loading: true,
            error: None,
            saved_id: None,
        }
    }

    /// Load categories and, in edit mode, the recipe being edited
    pub async fn mount<S: RecipeSource>(&mut self, source: &S) {
        self.loading = true;
        if let Err(e) = self.load(source).await {
            tracing::error!("Failed to load form data: {}", e);
            self.error = Some(messages::ERR_LOAD_FORM.to_string());
        }
        self.loading = false;
    }

    async fn load<S: RecipeSource>(&mut self, source: &S) -> Result<(), ClientError> {
        self.categories = source.categories().await?;
        if let FormMode::Edit(id) = self.mode {
            let detail = source.recipe(id).await?;
            self.form = RecipeForm::from_detail(detail);
        }
        Ok(())
    }

    /// Validate locally, then create or update. Returns true on success.
    pub async fn submit<S: RecipeSource>(&mut self, source: &S) -> bool {
        self.error = None;

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.to_string());
                return false;
            }
        };

        self.loading = true;
        let result = match self.mode {
            FormMode::Create => source.create_recipe(&payload).await,
            FormMode::Edit(id) => source.update_recipe(id, &payload).await.map(|_| id),
        };
        self.loading = false;

        match result {
            Ok(id) => {
                tracing::info!("Recipe {} saved", id);
                self.saved_id = Some(id);
                true
            }
            Err(e) => {
                tracing::error!("Failed to save recipe: {}", e);
                self.error = Some(
                    e.server_message()
                        .unwrap_or(messages::ERR_SAVE)
                        .to_string(),
                );
                false
            }
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => messages::TITLE_CREATE,
            FormMode::Edit(_) => messages::TITLE_EDIT,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Choices offered by the difficulty selector
    pub fn difficulty_options(&self) -> &'static [&'static str] {
        &DIFFICULTY_LEVELS
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identifier of the recipe after a successful submit
    pub fn saved_id(&self) -> Option<i64> {
        self.saved_id
    }
}
