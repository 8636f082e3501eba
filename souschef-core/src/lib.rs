pub mod ai;

pub use ai::{
    format_instructions, parse_suggestion, suggest_recipe, AiClient, AiConfig, AiError,
    ConfigError, FakeClient, OpenRouterClient, RecipeSuggestion, SchemaError, SuggestionResult,
};
