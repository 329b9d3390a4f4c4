use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured recipe extracted from generated markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Recipe title; `None` when the text carried no title.
    pub title: Option<String>,
    /// Ingredient lines in source order, list markers removed.
    pub ingredients: Vec<String>,
    /// Preparation steps as a single text block.
    pub instructions: String,
}

impl ParsedRecipe {
    /// Renders the recipe back into the heading form understood by
    /// [`crate::extract`].
    ///
    /// A recipe with neither title nor ingredients is rendered as its bare
    /// instructions, so extracting the output again goes through the same
    /// unstructured path that produced it.
    pub fn to_markdown(&self) -> String {
        if self.title.is_none() && self.ingredients.is_empty() {
            return self.instructions.clone();
        }

        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str("## Title\n");
            out.push_str(title);
            out.push_str("\n\n");
        }
        if !self.ingredients.is_empty() {
            out.push_str("## Ingredients\n");
            for ingredient in &self.ingredients {
                out.push_str("- ");
                out.push_str(ingredient);
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str("## Instructions\n");
        out.push_str(&self.instructions);
        out.push('\n');
        out
    }
}

/// JSON body accepted by the save endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecipeRequest {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// JSON body sent to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    pub ingredients_string: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRecipeResponse {
    #[serde(default)]
    pub recipe: Option<String>,
}

/// Identifier of a stored recipe; the backend may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{n}"),
            RecipeId::Text(s) => f.write_str(s),
        }
    }
}

/// Recipe returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedRecipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A single field error reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub path: Option<String>,
    pub msg: String,
}

/// Error body returned by the recipe endpoints. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// News article as forwarded by the headlines endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Error body the headlines endpoint returns on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Query parameters for the headlines endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub country: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for HeadlinesQuery {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            page: 1,
            page_size: 10,
        }
    }
}
