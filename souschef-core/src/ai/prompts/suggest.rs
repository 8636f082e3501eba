//! Recipe suggestion prompt.

use crate::ai::schema::format_instructions;

/// Render the system prompt for recipe suggestion.
///
/// Fixed behavior guidance plus the format instructions derived from the
/// output schema. Deterministic; never fails.
pub fn render_suggest_system_prompt() -> String {
    format!(
        "You are a helpful recipe suggestion agent. \
         Based on the user's available ingredients and preferences (e.g., vegan, quick), \
         suggest a simple, creative recipe. Keep it realistic and tasty. \
         If preferences are not provided, assume general healthy options.\n\n{}",
        format_instructions()
    )
}

/// Render the user message with the ingredients and preferences.
///
/// Empty strings are valid input and yield a generic prompt.
pub fn render_suggest_user_prompt(ingredients: &str, preferences: &str) -> String {
    format!(
        "Ingredients: {ingredients}. Preferences: {preferences}.",
        ingredients = ingredients,
        preferences = preferences
    )
}
