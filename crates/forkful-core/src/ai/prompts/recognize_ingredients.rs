//! Prompt templates for recognizing ingredients in a photo.

pub fn render_recognize_system_prompt() -> String {
    "You are an expert food ingredient recognition system. \
     Analyze images and identify all visible food ingredients with high accuracy. \
     Return only ingredient names that can be used for cooking, excluding non-food items."
        .to_string()
}

pub fn render_recognize_user_prompt() -> String {
    r#"Please identify all the food ingredients visible in this image. Return the results as JSON with this exact structure:
{"ingredients": ["ingredient name", ...]}

Focus only on ingredients that can be used for cooking. Be specific but concise with ingredient names. For example: {"ingredients": ["chicken breast", "red onion", "garlic", "tomatoes", "basil leaves"]}. If no food ingredients are visible, return {"ingredients": []}."#
        .to_string()
}
