mod import;
mod seed;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "forkful")]
#[command(about = "Forkful CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Insert the built-in sample recipes
    Seed {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Bulk-import recipes from a JSON dataset file
    Import {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Path to a JSON file holding an array of recipes
        #[arg(long)]
        file: String,
    },
    /// Search recipes by ingredients and print the ranked matches
    Search {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
        /// Number of results to request
        #[arg(long, default_value_t = 6)]
        limit: i64,
        /// Restrict to one cuisine
        #[arg(long)]
        cuisine: Option<String>,
        /// Ingredients to search with
        ingredients: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ping { server } => {
            ping(&server).await?;
        }
        Commands::Seed { server } => {
            seed::seed(&server).await?;
        }
        Commands::Import { server, file } => {
            import::import(&server, &file).await?;
        }
        Commands::Search {
            server,
            limit,
            cuisine,
            ingredients,
        } => {
            search(&server, limit, cuisine, ingredients).await?;
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

async fn ping(server: &str) -> Result<()> {
    let response = reqwest::get(format!("{}/api/health", server)).await?;

    if !response.status().is_success() {
        bail!("Server returned {}", response.status());
    }

    let health: HealthResponse = response.json().await?;
    println!("{}", health.status);

    Ok(())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    recipes: Vec<SearchMatch>,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    recipe: SearchedRecipe,
    match_count: usize,
    match_percentage: f64,
}

#[derive(Debug, Deserialize)]
struct SearchedRecipe {
    title: String,
    cuisine: Option<String>,
}

async fn search(
    server: &str,
    limit: i64,
    cuisine: Option<String>,
    ingredients: Vec<String>,
) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/recipes/search", server))
        .json(&serde_json::json!({
            "ingredients": ingredients,
            "limit": limit,
            "cuisine": cuisine,
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        bail!("Server returned {}", response.status());
    }

    let results: SearchResponse = response.json().await?;

    if results.recipes.is_empty() {
        println!("No matching recipes.");
        return Ok(());
    }

    for result in results.recipes {
        println!(
            "{:>3.0}%  ({} matched)  {}{}",
            result.match_percentage * 100.0,
            result.match_count,
            result.recipe.title,
            result
                .recipe
                .cuisine
                .map(|c| format!("  [{}]", c))
                .unwrap_or_default(),
        );
    }

    Ok(())
}
