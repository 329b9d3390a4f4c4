pub mod classify;
mod http;

pub use http::HttpBackend;

use crate::error::AssistantError;
use crate::model::{Article, HeadlinesQuery, SaveRecipeRequest, SearchedRecipe};
use async_trait::async_trait;

/// Endpoints the assistant needs from its backend.
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// Short name used in log lines
    fn backend_name(&self) -> &str;

    /// Asks the backend to write a recipe from the given ingredients and
    /// returns the generated markdown.
    async fn generate_recipe(&self, ingredients: &[String]) -> Result<String, AssistantError>;

    /// Stores a validated recipe.
    async fn save_recipe(&self, recipe: &SaveRecipeRequest) -> Result<(), AssistantError>;

    /// Finds stored recipes whose title contains `title`. No match is an
    /// empty list, not an error.
    async fn search_recipes(&self, title: &str) -> Result<Vec<SearchedRecipe>, AssistantError>;

    /// Fetches a page of news headlines.
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<Article>, AssistantError>;
}
