pub mod category;
pub mod recipe;

pub use category::Category;
pub use recipe::{
    CategoryRef, CreatedRecipe, Ingredient, Instruction, MessageResponse, NewRecipe,
    RecipeDetail, RecipeListParams, RecipePayload, RecipeRow,
};
