use serde::Serialize;
use thiserror::Error;

/// Number of ingredients required before a recipe can be generated.
pub const MIN_INGREDIENTS: usize = 4;

/// Shortest accepted ingredient name, in characters.
const MIN_INGREDIENT_LEN: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientError {
    #[error("The ingredient cannot be empty.")]
    Empty,

    #[error("'{0}' is already in the list.")]
    Duplicate(String),

    #[error("The ingredient must have at least 2 characters.")]
    TooShort,
}

/// Ingredients the user has on hand, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trimmed ingredient. Duplicates are detected case-insensitively.
    pub fn add(&mut self, ingredient: &str) -> Result<(), IngredientError> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(IngredientError::Empty);
        }

        let lowered = ingredient.to_lowercase();
        if self.items.iter().any(|item| item.to_lowercase() == lowered) {
            return Err(IngredientError::Duplicate(ingredient.to_string()));
        }

        if ingredient.chars().count() < MIN_INGREDIENT_LEN {
            return Err(IngredientError::TooShort);
        }

        self.items.push(ingredient.to_string());
        Ok(())
    }

    /// Removes an exact match. Returns whether anything was removed.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != ingredient);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// True once the list holds at least `minimum` ingredients.
    pub fn has_at_least(&self, minimum: usize) -> bool {
        self.items.len() >= minimum
    }

    /// True once the list holds at least [`MIN_INGREDIENTS`] ingredients.
    pub fn is_ready(&self) -> bool {
        self.has_at_least(MIN_INGREDIENTS)
    }

    /// Comma-separated form sent to the generation endpoint.
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

impl<'a> TryFrom<&'a [&'a str]> for IngredientList {
    type Error = IngredientError;

    fn try_from(ingredients: &'a [&'a str]) -> Result<Self, Self::Error> {
        let mut list = IngredientList::new();
        for ingredient in ingredients {
            list.add(ingredient)?;
        }
        Ok(list)
    }
}
