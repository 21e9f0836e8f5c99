use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::json;

/// One entry in an import file. Datasets in the wild carry ingredients either
/// as plain strings or as name/amount pairs; both are accepted.
#[derive(Debug, Deserialize)]
struct ImportRecipe {
    title: String,
    #[serde(default)]
    description: Option<String>,
    ingredients: Vec<ImportIngredient>,
    instructions: String,
    #[serde(default)]
    cook_time_minutes: Option<i32>,
    #[serde(default)]
    servings: Option<i32>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportIngredient {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        amount: Option<String>,
    },
}

impl ImportIngredient {
    fn into_payload(self) -> serde_json::Value {
        match self {
            ImportIngredient::Name(name) => json!({ "name": name }),
            ImportIngredient::Detailed { name, amount } => json!({
                "name": name,
                "amount": amount,
            }),
        }
    }
}

pub async fn import(server: &str, file: &str) -> Result<()> {
    let contents =
        std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;

    let recipes: Vec<ImportRecipe> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", file))?;

    if recipes.is_empty() {
        bail!("{} holds no recipes", file);
    }

    println!("Importing {} recipes from {}", recipes.len(), file);

    let client = reqwest::Client::new();
    let mut created = 0;
    let mut failed = 0;

    for recipe in recipes {
        let title = recipe.title.clone();
        let payload = json!({
            "title": recipe.title,
            "description": recipe.description,
            "ingredients": recipe
                .ingredients
                .into_iter()
                .map(ImportIngredient::into_payload)
                .collect::<Vec<_>>(),
            "instructions": recipe.instructions,
            "cook_time_minutes": recipe.cook_time_minutes,
            "servings": recipe.servings,
            "difficulty": recipe.difficulty,
            "cuisine": recipe.cuisine,
            "image_url": recipe.image_url,
        });

        let response = client
            .post(format!("{}/api/recipes", server))
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to create '{}'", title))?;

        if response.status().is_success() {
            created += 1;
        } else {
            failed += 1;
            println!("Failed: {} ({})", title, response.status());
        }
    }

    println!("Imported {} recipes, {} failed", created, failed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_string_ingredients() {
        let data = r#"[{
            "title": "Rice",
            "ingredients": ["rice", "water"],
            "instructions": "Boil."
        }]"#;
        let recipes: Vec<ImportRecipe> = serde_json::from_str(data).unwrap();
        assert_eq!(recipes.len(), 1);
        assert!(matches!(recipes[0].ingredients[0], ImportIngredient::Name(_)));
    }

    #[test]
    fn parses_detailed_ingredients() {
        let data = r#"[{
            "title": "Rice",
            "ingredients": [{"name": "rice", "amount": "1 cup"}],
            "instructions": "Boil.",
            "cuisine": "Japanese"
        }]"#;
        let recipes: Vec<ImportRecipe> = serde_json::from_str(data).unwrap();
        let payload = match &recipes[0].ingredients[0] {
            ImportIngredient::Detailed { name, amount } => (name.clone(), amount.clone()),
            other => panic!("unexpected variant: {:?}", other),
        };
        assert_eq!(payload, ("rice".to_string(), Some("1 cup".to_string())));
    }
}
