//! AI prompt templates.

pub mod generate_recipes;
pub mod recognize_ingredients;

pub use generate_recipes::{render_generate_system_prompt, render_generate_user_prompt};
pub use recognize_ingredients::{render_recognize_system_prompt, render_recognize_user_prompt};
