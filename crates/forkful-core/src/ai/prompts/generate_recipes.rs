//! Prompt templates for generating recipes from a list of ingredients.

pub fn render_generate_system_prompt() -> String {
    "You are a professional chef and recipe developer. \
     Create detailed, practical recipes that are delicious and easy to follow."
        .to_string()
}

/// Map a free-text cooking-time preference onto an explicit constraint line.
fn render_time_constraint(cooking_time: &str) -> Option<String> {
    let constraint = if cooking_time.contains("15") {
        "Each recipe must be completed in 15 minutes or less. \
         Focus on quick cooking methods, minimal prep, and simple techniques."
    } else if cooking_time.contains("30") {
        "Each recipe should take no more than 30 minutes total cooking time."
    } else if cooking_time.contains("60") {
        "Each recipe should take no more than 60 minutes total cooking time."
    } else if cooking_time.to_lowercase().contains("quick") {
        "Focus on quick recipes that can be made in 15-20 minutes."
    } else {
        return None;
    };
    Some(constraint.to_string())
}

pub fn render_generate_user_prompt(
    ingredients: &[String],
    dietary_preferences: Option<&str>,
    cooking_time: Option<&str>,
) -> String {
    let mut prompt = format!(
        "Generate 3 unique, authentic recipes using these ingredients: {}\n",
        ingredients.join(", ")
    );

    if let Some(preferences) = dietary_preferences {
        prompt.push_str(&format!("Dietary preferences: {}\n", preferences));
    }

    if let Some(constraint) = cooking_time.and_then(render_time_constraint) {
        prompt.push_str(&format!("TIME CONSTRAINT: {}\n", constraint));
    }

    prompt.push_str(
        r#"
Please respond with exactly this JSON format:
{
  "recipes": [
    {
      "title": "Recipe Name",
      "description": "Brief description",
      "cook_time": "30 minutes",
      "servings": "4 servings",
      "difficulty": "Easy",
      "ingredients": [
        {"name": "ingredient name", "amount": "1 cup"},
        {"name": "ingredient name", "amount": "2 tbsp"}
      ],
      "instructions": [
        "Step 1 instruction",
        "Step 2 instruction"
      ],
      "tags": ["tag1", "tag2"]
    }
  ]
}"#,
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_lists_ingredients() {
        let prompt = render_generate_user_prompt(
            &["chicken".to_string(), "rice".to_string()],
            None,
            None,
        );
        assert!(prompt.contains("chicken, rice"));
        assert!(prompt.contains("\"recipes\""));
        assert!(!prompt.contains("TIME CONSTRAINT"));
    }

    #[test]
    fn dietary_preferences_are_included_when_present() {
        let prompt =
            render_generate_user_prompt(&["tofu".to_string()], Some("vegetarian"), None);
        assert!(prompt.contains("Dietary preferences: vegetarian"));
    }

    #[test]
    fn cooking_time_maps_to_a_constraint() {
        let prompt =
            render_generate_user_prompt(&["eggs".to_string()], None, Some("under 15 minutes"));
        assert!(prompt.contains("TIME CONSTRAINT"));
        assert!(prompt.contains("15 minutes or less"));

        let prompt = render_generate_user_prompt(&["eggs".to_string()], None, Some("quick"));
        assert!(prompt.contains("15-20 minutes"));
    }

    #[test]
    fn unrecognized_cooking_time_adds_no_constraint() {
        let prompt =
            render_generate_user_prompt(&["eggs".to_string()], None, Some("whenever"));
        assert!(!prompt.contains("TIME CONSTRAINT"));
    }
}
