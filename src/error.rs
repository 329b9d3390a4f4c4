use crate::ingredients::IngredientError;
use crate::processor::{ParseFailure, ValidationFailure};
use thiserror::Error;

/// Errors that can occur while talking to the recipe backend or preparing
/// data for it. Every message is meant to be shown to the user as is.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport failure or undecodable response body
    #[error("Could not reach the server: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Backend URL could not be built
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Generated recipe text could not be parsed
    #[error("Could not read the recipe: {0}")]
    Parse(#[from] ParseFailure),

    /// Parsed recipe failed the save checks
    #[error("The recipe cannot be saved: {0}")]
    Validation(#[from] ValidationFailure),

    /// Ingredient rejected by the ingredient list
    #[error("{0}")]
    Ingredient(#[from] IngredientError),

    /// Too few ingredients to ask for a recipe
    #[error("At least {required} ingredients are needed to generate a recipe (have {actual}).")]
    NotEnoughIngredients { required: usize, actual: usize },

    /// Nothing to save
    #[error("There is no recipe to save.")]
    NothingToSave,

    /// Blank search input
    #[error("Please enter some words of the title to search for.")]
    EmptySearch,

    /// Generation quota of the upstream model provider is exhausted
    #[error("You have used up your free recipe generation credits for this month. Wait for the next billing cycle or upgrade your plan to keep cooking.")]
    QuotaExceeded,

    /// 402 response not caused by quota exhaustion
    #[error("Payment required (402): {0}")]
    PaymentRequired(String),

    /// 2xx response without the expected content
    #[error("{0}")]
    UnexpectedResponse(String),

    /// Save endpoint failed without explaining why
    #[error("Error {status} while saving the recipe.")]
    SaveFailed { status: u16 },

    /// Non-2xx response from a recipe endpoint
    #[error("Error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failure reported by the headlines endpoint
    #[error("{0}")]
    Headlines(String),
}
