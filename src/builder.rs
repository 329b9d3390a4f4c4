use std::time::Duration;

use log::{debug, info};

use crate::backend::{HttpBackend, RecipeBackend};
use crate::config::AssistantConfig;
use crate::ingredients::{IngredientList, MIN_INGREDIENTS};
use crate::model::{Article, HeadlinesQuery, ParsedRecipe, SaveRecipeRequest, SearchedRecipe};
use crate::processor::{self, ValidationRules};
use crate::AssistantError;

/// Builder for configuring a [`RecipeAssistant`]
#[derive(Default)]
pub struct RecipeAssistantBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    rules: Option<ValidationRules>,
    min_ingredients: Option<usize>,
    news_country: Option<String>,
    news_page_size: Option<u32>,
    backend: Option<Box<dyn RecipeBackend>>,
}

impl RecipeAssistantBuilder {
    /// Set the root URL of the recipe backend
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .base_url("http://localhost:3000");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the title bounds used before saving
    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set how many ingredients are needed before generating
    pub fn min_ingredients(mut self, minimum: usize) -> Self {
        self.min_ingredients = Some(minimum);
        self
    }

    /// Set the country and page size used for headlines
    pub fn news(mut self, country: impl Into<String>, page_size: u32) -> Self {
        self.news_country = Some(country.into());
        self.news_page_size = Some(page_size);
        self
    }

    /// Use a custom backend instead of [`HttpBackend`]
    ///
    /// When set, `base_url` and `timeout` are ignored.
    pub fn backend(mut self, backend: Box<dyn RecipeBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Apply every setting from a loaded configuration
    pub fn from_config(self, config: &AssistantConfig) -> Self {
        self.base_url(config.backend_url.clone())
            .timeout(Duration::from_secs(config.timeout))
            .rules(config.validation)
            .min_ingredients(config.min_ingredients)
            .news(config.news.country.clone(), config.news.page_size)
    }

    /// Build the assistant
    ///
    /// # Errors
    /// Returns `AssistantError` if the backend URL is invalid or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<RecipeAssistant, AssistantError> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let base_url = self
                    .base_url
                    .unwrap_or_else(|| AssistantConfig::default().backend_url);
                let http = match self.timeout {
                    Some(timeout) => HttpBackend::with_timeout(&base_url, timeout)?,
                    None => HttpBackend::new(&base_url)?,
                };
                Box::new(http) as Box<dyn RecipeBackend>
            }
        };

        let defaults = HeadlinesQuery::default();
        Ok(RecipeAssistant {
            backend,
            rules: self.rules.unwrap_or_default(),
            min_ingredients: self.min_ingredients.unwrap_or(MIN_INGREDIENTS),
            news_country: self.news_country.unwrap_or(defaults.country),
            news_page_size: self.news_page_size.unwrap_or(defaults.page_size),
        })
    }
}

/// Generates, checks, saves and finds recipes through a [`RecipeBackend`].
pub struct RecipeAssistant {
    backend: Box<dyn RecipeBackend>,
    rules: ValidationRules,
    min_ingredients: usize,
    news_country: String,
    news_page_size: u32,
}

impl RecipeAssistant {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder();
    /// ```
    pub fn builder() -> RecipeAssistantBuilder {
        RecipeAssistantBuilder::default()
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Asks the backend for a recipe using the listed ingredients.
    ///
    /// Lists shorter than the configured minimum are rejected without
    /// contacting the backend.
    pub async fn generate(&self, ingredients: &IngredientList) -> Result<String, AssistantError> {
        if !ingredients.has_at_least(self.min_ingredients) {
            return Err(AssistantError::NotEnoughIngredients {
                required: self.min_ingredients,
                actual: ingredients.len(),
            });
        }

        info!(
            "Generating recipe from {} ingredients via {}",
            ingredients.len(),
            self.backend.backend_name()
        );
        self.backend.generate_recipe(ingredients.as_slice()).await
    }

    /// See [`processor::extract`].
    pub fn extract(&self, raw: &str) -> Result<ParsedRecipe, AssistantError> {
        Ok(processor::extract(raw)?)
    }

    /// Extracts generated markdown and checks it against this assistant's
    /// rules without saving it.
    pub fn check(&self, raw: &str) -> Result<ParsedRecipe, AssistantError> {
        crate::parse_for_saving(raw, &self.rules)
    }

    /// Checks a recipe against this assistant's rules.
    pub fn validate(&self, recipe: &ParsedRecipe) -> Result<(), AssistantError> {
        Ok(processor::validate_with(recipe, &self.rules)?)
    }

    /// Validates and stores a recipe. Invalid recipes never reach the backend.
    pub async fn save(&self, recipe: &ParsedRecipe) -> Result<(), AssistantError> {
        self.validate(recipe)?;

        let request = SaveRecipeRequest {
            title: recipe.title.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.trim().to_string(),
        };
        self.backend.save_recipe(&request).await?;
        info!("Saved recipe '{}'", request.title);
        Ok(())
    }

    /// Extracts, validates and stores generated markdown.
    pub async fn save_markdown(&self, raw: &str) -> Result<ParsedRecipe, AssistantError> {
        if raw.trim().is_empty() {
            return Err(AssistantError::NothingToSave);
        }
        let recipe = self.extract(raw)?;
        self.save(&recipe).await?;
        Ok(recipe)
    }

    /// Finds stored recipes by title words.
    pub async fn search(&self, title: &str) -> Result<Vec<SearchedRecipe>, AssistantError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AssistantError::EmptySearch);
        }
        let recipes = self.backend.search_recipes(title).await?;
        debug!("Search for '{}' returned {} recipes", title, recipes.len());
        Ok(recipes)
    }

    /// Fetches a page of headlines. `page_size` defaults to the configured one.
    pub async fn headlines(
        &self,
        page: u32,
        page_size: Option<u32>,
    ) -> Result<Vec<Article>, AssistantError> {
        let query = HeadlinesQuery {
            country: self.news_country.clone(),
            page,
            page_size: page_size.unwrap_or(self.news_page_size),
        };
        self.backend.top_headlines(&query).await
    }

    /// True when a single headline can be fetched.
    pub async fn check_headlines_connection(&self) -> bool {
        self.headlines(1, Some(1)).await.is_ok()
    }
}
