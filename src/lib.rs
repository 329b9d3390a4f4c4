//! Recipe assistant library.
//!
//! Turns an ingredient list into an AI-generated recipe through a backend,
//! extracts the title, ingredients and instructions from the generated
//! markdown, checks them before saving, and searches saved recipes.
//!
//! ```
//! use recipe_assistant::{extract, validate};
//!
//! let recipe = extract("## Title\nTomato Soup\n## Ingredients\n- Tomato\n- Onion\n## Instructions\nBoil and blend.").unwrap();
//! assert_eq!(recipe.ingredients, vec!["Tomato", "Onion"]);
//! assert!(validate(&recipe).is_ok());
//! ```

pub mod backend;
pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod processor;

pub use backend::{HttpBackend, RecipeBackend};
pub use builder::{RecipeAssistant, RecipeAssistantBuilder};
pub use config::AssistantConfig;
pub use error::AssistantError;
pub use ingredients::{IngredientError, IngredientList, MIN_INGREDIENTS};
pub use model::{Article, ParsedRecipe, SaveRecipeRequest, SearchedRecipe};
pub use processor::{
    extract, validate, validate_all, validate_with, ParseFailure, ValidationFailure,
    ValidationRules, MAX_TITLE_LEN, MIN_TITLE_LEN,
};

/// Build an assistant from `config.toml` and `RECIPE_ASSISTANT__*` variables.
pub fn assistant_from_env() -> Result<RecipeAssistant, AssistantError> {
    let config = AssistantConfig::load()?;
    RecipeAssistant::builder().from_config(&config).build()
}

/// Extract generated markdown and check it against `rules` in one step.
pub fn parse_for_saving(raw: &str, rules: &ValidationRules) -> Result<ParsedRecipe, AssistantError> {
    let recipe = extract(raw)?;
    validate_with(&recipe, rules)?;
    Ok(recipe)
}
