use indoc::indoc;
use recipe_assistant::{extract, validate, ParseFailure, ParsedRecipe, ValidationFailure};

#[test]
fn test_tomato_soup() {
    let raw = indoc! {"
        ## Title
        Tomato Soup
        ## Ingredients
        - Tomato
        - Onion
        ## Instructions
        Boil and blend.
    "};

    let recipe = extract(raw).unwrap();
    assert_eq!(
        recipe,
        ParsedRecipe {
            title: Some("Tomato Soup".to_string()),
            ingredients: vec!["Tomato".to_string(), "Onion".to_string()],
            instructions: "Boil and blend.".to_string(),
        }
    );
    assert!(validate(&recipe).is_ok());
}

#[test]
fn test_typical_generated_output() {
    // Generators like to add chatter before the first heading and mix list styles
    let raw = indoc! {"
        Sure! Here is a recipe using your ingredients.

        ## Title
          Spanish Rice with Beans

        ## Ingredients
        - 1 cup rice
        * 1 can black beans
        -2 tomatoes, diced

        *   1 tsp salt

        ## Instructions
        1. Rinse the rice.
        2. Simmer everything for 20 minutes.

        ## Notes
        Serve hot.
    "};

    let recipe = extract(raw).unwrap();
    assert_eq!(recipe.title.as_deref(), Some("Spanish Rice with Beans"));
    assert_eq!(
        recipe.ingredients,
        vec![
            "1 cup rice",
            "1 can black beans",
            "2 tomatoes, diced",
            "1 tsp salt"
        ]
    );
    assert_eq!(
        recipe.instructions,
        "1. Rinse the rice.\n2. Simmer everything for 20 minutes.\n\n## Notes\nServe hot."
    );
}

#[test]
fn test_crlf_and_case_insensitive_headings() {
    let raw = "## TITLE\r\nPancakes\r\n## ingredients\r\n- Flour\r\n- Milk\r\n## Instructions:\r\nWhisk and fry.\r\n";
    let recipe = extract(raw).unwrap();
    assert_eq!(recipe.title.as_deref(), Some("Pancakes"));
    assert_eq!(recipe.ingredients, vec!["Flour", "Milk"]);
    assert_eq!(recipe.instructions, "Whisk and fry.");
}

#[test]
fn test_sections_out_of_order() {
    let raw = indoc! {"
        ## Instructions
        Mix well.
        ## Ingredients
        - Sugar
        ## Title
        Sweet Mix
    "};
    let recipe = extract(raw).unwrap();
    assert_eq!(recipe.title.as_deref(), Some("Sweet Mix"));
    assert_eq!(recipe.ingredients, vec!["Sugar"]);
    assert_eq!(recipe.instructions, "Mix well.");
}

#[test]
fn test_duplicate_heading_uses_first_and_ends_section() {
    let raw = indoc! {"
        ## Title
        First Title
        ## Ingredients
        - Egg
        ## Ingredients
        - Ignored
        ## Instructions
        Fry the egg.
        ## Title
        Second Title
    "};
    let recipe = extract(raw).unwrap();
    assert_eq!(recipe.title.as_deref(), Some("First Title"));
    assert_eq!(recipe.ingredients, vec!["Egg"]);
    assert_eq!(recipe.instructions, "Fry the egg.");
}

#[test]
fn test_blank_ingredients_section() {
    let raw = "## Title\nSoup\n## Ingredients\n\n   \n\n## Instructions\nBoil.";
    assert_eq!(extract(raw), Err(ParseFailure::NoIngredientsListed));
}

#[test]
fn test_ingredients_with_only_markers() {
    let raw = "## Title\nSoup\n## Ingredients\n-\n*\n## Instructions\nBoil.";
    assert_eq!(extract(raw), Err(ParseFailure::NoIngredientsListed));
}

#[test]
fn test_empty_ingredients_section() {
    let raw = "## Title\nSoup\n## Ingredients\n## Instructions\nBoil.";
    assert_eq!(extract(raw), Err(ParseFailure::IngredientsMissing));
}

#[test]
fn test_missing_instructions_still_finds_other_sections() {
    let raw = "## Title\nSoup\n## Ingredients\n- Water\n## Instructions\n   \n";
    assert_eq!(extract(raw), Err(ParseFailure::InstructionsMissing));
}

#[test]
fn test_missing_ingredients_does_not_block_instructions() {
    // Title present, ingredients missing: the failure names the ingredients
    let raw = "## Title\nSoup\n## Instructions\nBoil.";
    assert_eq!(extract(raw), Err(ParseFailure::IngredientsMissing));
}

#[test]
fn test_fallback_then_validation_fails() {
    let recipe = extract("Just eat it raw.").unwrap();
    assert_eq!(recipe.title, None);
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.instructions, "Just eat it raw.");
    assert_eq!(validate(&recipe), Err(ValidationFailure::NoIngredients));
}

#[test]
fn test_unrecognized_headings_do_not_prevent_fallback() {
    let recipe = extract("## Notes\nEat it raw.").unwrap();
    assert_eq!(recipe.title, None);
    assert_eq!(recipe.instructions, "## Notes\nEat it raw.");
}

#[test]
fn test_extract_roundtrip_is_stable() {
    let inputs = [
        indoc! {"
            ## Title
            Tomato Soup
            ## Ingredients
            - Tomato
            - - Onion
            * Basil
            ## Instructions
            Boil.

            Blend.
        "},
        "Just eat it raw.",
        "  # Title:\n  Gazpacho \n# Ingredients\n* Cucumber\n# Instructions\nChill.",
    ];

    for raw in inputs {
        let first = extract(raw).unwrap();
        let second = extract(&first.to_markdown()).unwrap();
        assert_eq!(first, second, "round trip changed recipe for {raw:?}");
    }
}

#[test]
fn test_extract_never_panics_on_odd_input() {
    let inputs = [
        "",
        "#",
        "##",
        "## ",
        "## Title",
        "## Title\n",
        "\n\n\n",
        "## Ingredients\n- ñandú\n## Instructions\n🍅",
        "\r\n\r\n## Title\r\n",
        "#######Title\nx",
    ];
    for raw in inputs {
        let _ = extract(raw);
    }
}
