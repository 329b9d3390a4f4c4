use log::debug;
use recipe_assistant::{assistant_from_env, extract, IngredientList, RecipeAssistant};
use std::env;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

const USAGE: &str = "Usage: recipe-assistant <command> [args]

Commands:
  parse <FILE|->              Extract title, ingredients and instructions as JSON
  check <FILE|->              Extract and validate a recipe without saving it
  generate <INGREDIENT>...    Generate a recipe from at least 4 ingredients
  save <FILE|->               Extract, validate and save a recipe
  search <WORDS>...           Search saved recipes by title
  headlines [PAGE] [SIZE]     Show news headlines";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let (command, rest) = args.split_first().ok_or(USAGE)?;
    debug!("Running '{}' with {} arguments", command, rest.len());

    match command.as_str() {
        "parse" => {
            let text = read_input(rest.first()).await?;
            let recipe = extract(&text)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        "check" => {
            let text = read_input(rest.first()).await?;
            let assistant = assistant_from_env()?;
            let recipe = assistant.check(&text)?;
            println!("{}", serde_json::to_string_pretty(&recipe)?);
        }
        "generate" => {
            let mut ingredients = IngredientList::new();
            for ingredient in rest {
                ingredients.add(ingredient)?;
            }
            let assistant = assistant_from_env()?;
            let markdown = assistant.generate(&ingredients).await?;
            println!("{}", markdown);
        }
        "save" => {
            let text = read_input(rest.first()).await?;
            let assistant = assistant_from_env()?;
            let recipe = assistant.save_markdown(&text).await?;
            println!(
                "Saved '{}' to your recipe book.",
                recipe.title.unwrap_or_default()
            );
        }
        "search" => {
            let assistant = assistant_from_env()?;
            search(&assistant, &rest.join(" ")).await?;
        }
        "headlines" => {
            let page = rest.first().map(|p| p.parse()).transpose()?.unwrap_or(1);
            let page_size = rest.get(1).map(|s| s.parse()).transpose()?;
            let assistant = assistant_from_env()?;
            for article in assistant.headlines(page, page_size).await? {
                println!("{} ({})\n  {}", article.title, article.source.name, article.url);
            }
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

async fn search(assistant: &RecipeAssistant, words: &str) -> Result<(), Box<dyn std::error::Error>> {
    let recipes = assistant.search(words).await?;
    if recipes.is_empty() {
        println!("No recipes found with those words in the title.");
        return Ok(());
    }
    for recipe in recipes {
        println!("[{}] {}", recipe.id, recipe.title);
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient);
        }
        println!("  {}\n", recipe.instructions);
    }
    Ok(())
}

/// Reads a file, or standard input when the path is `-` or missing.
async fn read_input(path: Option<&String>) -> Result<String, Box<dyn std::error::Error>> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
    }
}
