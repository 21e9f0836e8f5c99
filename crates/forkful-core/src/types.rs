//! Shared domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recipe reduced to what the match ranker needs: an id, an optional
/// cuisine label, and its ingredient names. Treated as a read-only snapshot
/// for the duration of a ranking call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecipe {
    pub id: Uuid,
    pub cuisine: Option<String>,
    pub ingredients: Vec<String>,
}

/// An ingredient line in an AI-generated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIngredient {
    pub name: String,
    pub amount: String,
}

/// A recipe produced by the generation prompt. Not persisted until the user
/// saves it through the recipe CRUD API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub ingredients: Vec<GeneratedIngredient>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
