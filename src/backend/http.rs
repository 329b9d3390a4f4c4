use crate::backend::{classify, RecipeBackend};
use crate::error::AssistantError;
use crate::model::{
    Article, GenerateRecipeRequest, GenerateRecipeResponse, HeadlinesQuery, NewsResponse,
    SaveRecipeRequest, SearchedRecipe,
};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// [`RecipeBackend`] speaking JSON over HTTP.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` with reqwest's default client
    pub fn new(base_url: &str) -> Result<Self, AssistantError> {
        Ok(HttpBackend {
            client: Client::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a backend whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, AssistantError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpBackend {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AssistantError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AssistantError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, AssistantError> {
    let url = Url::parse(base_url)
        .map_err(|e| AssistantError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AssistantError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

#[async_trait]
impl RecipeBackend for HttpBackend {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn generate_recipe(&self, ingredients: &[String]) -> Result<String, AssistantError> {
        let url = self.endpoint(&["api", "hf-chat-completion"])?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&GenerateRecipeRequest {
                ingredients_string: ingredients.join(", "),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Recipe generation failed with status {}", status);
            return Err(classify::generation_error(
                status.as_u16(),
                &classify::decode_error_body(&body),
            ));
        }

        let data: GenerateRecipeResponse = response.json().await?;
        data.recipe
            .filter(|recipe| !recipe.trim().is_empty())
            .ok_or_else(|| AssistantError::UnexpectedResponse(classify::MISSING_RECIPE.to_string()))
    }

    async fn save_recipe(&self, recipe: &SaveRecipeRequest) -> Result<(), AssistantError> {
        let url = self.endpoint(&["api", "recipes"])?;
        debug!("POST {} ({})", url, recipe.title);

        let response = self.client.post(url).json(recipe).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Saving '{}' failed with status {}", recipe.title, status);
            return Err(classify::save_error(
                status.as_u16(),
                &classify::decode_error_body(&body),
            ));
        }
        Ok(())
    }

    async fn search_recipes(&self, title: &str) -> Result<Vec<SearchedRecipe>, AssistantError> {
        let url = self.endpoint(&["api", "recipes", "by-name", title])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("No stored recipe matches '{}'", title);
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Recipe search failed with status {}", status);
            return match classify::search_error(
                status.as_u16(),
                &classify::decode_error_body(&body),
            ) {
                Some(err) => Err(err),
                None => Ok(Vec::new()),
            };
        }

        Ok(response.json().await?)
    }

    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<Article>, AssistantError> {
        let mut url = self.endpoint(&["api", "top-headlines"])?;
        url.query_pairs_mut()
            .append_pair("country", &query.country)
            .append_pair("page", &query.page.to_string())
            .append_pair("pageSize", &query.page_size.to_string());
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify::headlines_http_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &body,
            );
            warn!("Fetching headlines failed: {}", err);
            return Err(err);
        }

        let news: NewsResponse = response.json().await?;
        if news.status == "ok" {
            debug!("Received {} of {} headlines", news.articles.len(), news.total_results);
            Ok(news.articles)
        } else {
            let message = news
                .message
                .unwrap_or_else(|| classify::HEADLINES_UNKNOWN_ERROR.to_string());
            warn!(
                "Headlines endpoint reported '{}' (code: {})",
                message,
                news.code.as_deref().unwrap_or("none")
            );
            Err(AssistantError::Headlines(message))
        }
    }
}
