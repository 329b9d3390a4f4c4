//! Extraction and validation of generated recipe markdown.
//!
//! Generated recipes are expected to look like
//!
//! ```text
//! ## Title
//! Tomato Soup
//! ## Ingredients
//! - Tomato
//! - Onion
//! ## Instructions
//! Boil and blend.
//! ```
//!
//! [`extract`] turns such text into a [`ParsedRecipe`]; [`validate`] decides
//! whether that recipe may be saved.

mod sections;
mod validate;

pub use sections::{parse_heading, Section};
pub use validate::{
    validate, validate_all, validate_with, ValidationFailure, ValidationRules, MAX_TITLE_LEN,
    MIN_TITLE_LEN,
};

use crate::model::ParsedRecipe;
use log::debug;
use thiserror::Error;

/// Reasons [`extract`] can reject a text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Recipe title not found.")]
    TitleMissing,

    #[error("Ingredients section not found.")]
    IngredientsMissing,

    #[error("No ingredients were listed.")]
    NoIngredientsListed,

    #[error("Instructions section not found.")]
    InstructionsMissing,
}

/// Extracts title, ingredients and instructions from generated markdown.
///
/// Sections are located independently. When the text has no recognized
/// heading at all but is not blank, the whole trimmed text becomes the
/// instructions and the other fields stay empty; such a recipe still has to
/// pass [`validate`] before it can be saved.
pub fn extract(raw: &str) -> Result<ParsedRecipe, ParseFailure> {
    let sections = sections::scan(raw);

    if !sections.any() {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            debug!("No recipe headings found, treating text as instructions");
            return Ok(ParsedRecipe {
                title: None,
                ingredients: Vec::new(),
                instructions: trimmed.to_string(),
            });
        }
    }

    let title = sections
        .get(Section::Title)
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|title| !title.is_empty())
        .ok_or(ParseFailure::TitleMissing)?;

    let ingredient_lines = sections
        .get(Section::Ingredients)
        .filter(|lines| !lines.is_empty())
        .ok_or(ParseFailure::IngredientsMissing)?;
    let ingredients: Vec<String> = ingredient_lines
        .iter()
        .map(|line| sections::strip_list_marker(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if ingredients.is_empty() {
        return Err(ParseFailure::NoIngredientsListed);
    }

    let instructions = sections
        .get(Section::Instructions)
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|instructions| !instructions.is_empty())
        .ok_or(ParseFailure::InstructionsMissing)?;

    debug!(
        "Extracted recipe '{}' with {} ingredients",
        title,
        ingredients.len()
    );

    Ok(ParsedRecipe {
        title: Some(title),
        ingredients,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let raw = "## Title\nTomato Soup\n## Ingredients\n- Tomato\n- Onion\n## Instructions\nBoil and blend.";
        let recipe = extract(raw).unwrap();
        assert_eq!(recipe.title.as_deref(), Some("Tomato Soup"));
        assert_eq!(recipe.ingredients, vec!["Tomato", "Onion"]);
        assert_eq!(recipe.instructions, "Boil and blend.");
    }

    #[test]
    fn test_extract_empty_input() {
        assert_eq!(extract(""), Err(ParseFailure::TitleMissing));
        assert_eq!(extract("   \n\t\n"), Err(ParseFailure::TitleMissing));
    }

    #[test]
    fn test_extract_fallback() {
        let recipe = extract("  Just eat it raw.\n").unwrap();
        assert_eq!(recipe.title, None);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, "Just eat it raw.");
    }

    #[test]
    fn test_extract_failure_order() {
        assert_eq!(
            extract("## Ingredients\n- a\n## Instructions\nmix"),
            Err(ParseFailure::TitleMissing)
        );
        assert_eq!(
            extract("## Title\nSoup\n## Instructions\nmix"),
            Err(ParseFailure::IngredientsMissing)
        );
        assert_eq!(
            extract("## Title\nSoup\n## Ingredients\n- a"),
            Err(ParseFailure::InstructionsMissing)
        );
    }

    #[test]
    fn test_extract_blank_title_body() {
        assert_eq!(
            extract("## Title\n   \n## Ingredients\n- a\n## Instructions\nmix"),
            Err(ParseFailure::TitleMissing)
        );
    }
}
