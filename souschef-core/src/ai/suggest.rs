//! Recipe suggestion: the one operation this crate exposes to callers.

use crate::ai::prompts::suggest::{render_suggest_system_prompt, render_suggest_user_prompt};
use crate::ai::schema::{parse_suggestion, RecipeSuggestion};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, Usage};

/// Result of a suggestion call.
#[derive(Debug)]
pub struct SuggestionResult {
    pub suggestion: RecipeSuggestion,
    pub usage: Usage,
}

/// Suggest a recipe from the user's ingredients and preferences.
///
/// Issues exactly one chat-completion call and parses the completion into a
/// [`RecipeSuggestion`]. Any failure (transport, provider, or parse) returns
/// an error; there is no partial result.
pub async fn suggest_recipe(
    ai_client: &dyn AiClient,
    ingredients: &str,
    preferences: &str,
) -> Result<SuggestionResult, AiError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(render_suggest_system_prompt()),
            ChatMessage::user(render_suggest_user_prompt(ingredients, preferences)),
        ],
        json_response: true,
        max_tokens: Some(1024),
        temperature: Some(0.7),
    };

    let response = ai_client.complete(request).await?;

    let suggestion = parse_suggestion(&response.content)?;

    tracing::debug!(
        recipe_name = %suggestion.recipe_name,
        total_tokens = response.usage.total_tokens,
        "Parsed recipe suggestion"
    );

    Ok(SuggestionResult {
        suggestion,
        usage: response.usage,
    })
}
