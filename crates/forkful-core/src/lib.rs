pub mod ai;
pub mod matcher;
pub mod types;

pub use matcher::{rank, rank_with_rng, MatchResult};
pub use types::{CandidateRecipe, GeneratedIngredient, GeneratedRecipe};
