use crate::model::ParsedRecipe;
use serde::Deserialize;
use thiserror::Error;

/// Shortest title, in characters, that may be saved.
pub const MIN_TITLE_LEN: usize = 3;
/// Longest title, in characters, that may be saved.
pub const MAX_TITLE_LEN: usize = 90;

/// Reasons a parsed recipe cannot be saved.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("The recipe title has {0} characters, which is outside the allowed range.")]
    TitleLengthInvalid(usize),

    #[error("The recipe has no title.")]
    TitleMissing,

    #[error("The recipe lists no ingredients.")]
    NoIngredients,

    #[error("The recipe has no instructions.")]
    NoInstructions,
}

/// Bounds applied by [`validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidationRules {
    #[serde(default = "default_min_title_len")]
    pub min_title_len: usize,
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_title_len: MIN_TITLE_LEN,
            max_title_len: MAX_TITLE_LEN,
        }
    }
}

fn default_min_title_len() -> usize {
    MIN_TITLE_LEN
}

fn default_max_title_len() -> usize {
    MAX_TITLE_LEN
}

/// Checks a recipe against the default rules and returns the first failure.
pub fn validate(recipe: &ParsedRecipe) -> Result<(), ValidationFailure> {
    validate_with(recipe, &ValidationRules::default())
}

/// Checks a recipe against `rules` and returns the first failure.
pub fn validate_with(
    recipe: &ParsedRecipe,
    rules: &ValidationRules,
) -> Result<(), ValidationFailure> {
    match validate_all(recipe, rules).into_iter().next() {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}

/// Runs every check and collects all failures.
///
/// Failures are ordered title length, ingredients, instructions, missing
/// title. A recipe recovered from unstructured text has no title and no
/// ingredients, so it reports `NoIngredients` first.
pub fn validate_all(recipe: &ParsedRecipe, rules: &ValidationRules) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    if let Some(title) = &recipe.title {
        let len = title.chars().count();
        if len < rules.min_title_len || len > rules.max_title_len {
            failures.push(ValidationFailure::TitleLengthInvalid(len));
        }
    }
    if recipe.ingredients.is_empty() {
        failures.push(ValidationFailure::NoIngredients);
    }
    if recipe.instructions.trim().is_empty() {
        failures.push(ValidationFailure::NoInstructions);
    }
    if recipe.title.is_none() {
        failures.push(ValidationFailure::TitleMissing);
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_title(title: &str) -> ParsedRecipe {
        ParsedRecipe {
            title: Some(title.to_string()),
            ingredients: vec!["flour".to_string()],
            instructions: "Bake.".to_string(),
        }
    }

    #[test]
    fn test_title_length_bounds() {
        assert_eq!(
            validate(&recipe_with_title("ab")),
            Err(ValidationFailure::TitleLengthInvalid(2))
        );
        assert_eq!(validate(&recipe_with_title("abc")), Ok(()));
        assert_eq!(validate(&recipe_with_title(&"a".repeat(90))), Ok(()));
        assert_eq!(
            validate(&recipe_with_title(&"a".repeat(91))),
            Err(ValidationFailure::TitleLengthInvalid(91))
        );
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 3 characters, 6 bytes
        assert_eq!(validate(&recipe_with_title("ñññ")), Ok(()));
    }

    #[test]
    fn test_missing_title() {
        let mut recipe = recipe_with_title("Pie");
        recipe.title = None;
        assert_eq!(validate(&recipe), Err(ValidationFailure::TitleMissing));
    }

    #[test]
    fn test_missing_content() {
        let mut recipe = recipe_with_title("Pie");
        recipe.ingredients.clear();
        assert_eq!(validate(&recipe), Err(ValidationFailure::NoIngredients));

        let mut recipe = recipe_with_title("Pie");
        recipe.instructions = "  \n".to_string();
        assert_eq!(validate(&recipe), Err(ValidationFailure::NoInstructions));
    }

    #[test]
    fn test_validate_all_collects_everything() {
        let recipe = ParsedRecipe::default();
        assert_eq!(
            validate_all(&recipe, &ValidationRules::default()),
            vec![
                ValidationFailure::NoIngredients,
                ValidationFailure::NoInstructions,
                ValidationFailure::TitleMissing,
            ]
        );

        let recipe = ParsedRecipe {
            title: Some("ab".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_all(&recipe, &ValidationRules::default()),
            vec![
                ValidationFailure::TitleLengthInvalid(2),
                ValidationFailure::NoIngredients,
                ValidationFailure::NoInstructions,
            ]
        );
    }

    #[test]
    fn test_short_title_reported_before_missing_ingredients() {
        let recipe = ParsedRecipe {
            title: Some("ab".to_string()),
            ingredients: vec![],
            instructions: "x".to_string(),
        };
        assert_eq!(
            validate(&recipe),
            Err(ValidationFailure::TitleLengthInvalid(2))
        );
    }

    #[test]
    fn test_untitled_recipe_reports_missing_ingredients_first() {
        let recipe = ParsedRecipe {
            title: None,
            ingredients: vec![],
            instructions: "Just eat it raw.".to_string(),
        };
        assert_eq!(validate(&recipe), Err(ValidationFailure::NoIngredients));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_title_len: 1,
            max_title_len: 5,
        };
        assert_eq!(validate_with(&recipe_with_title("ab"), &rules), Ok(()));
        assert_eq!(
            validate_with(&recipe_with_title("abcdef"), &rules),
            Err(ValidationFailure::TitleLengthInvalid(6))
        );
    }
}
