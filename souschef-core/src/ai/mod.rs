//! AI client module for recipe suggestion via OpenRouter.
//!
//! This module provides:
//! - `AiClient` trait for abstracting the chat-completion provider
//! - `OpenRouterClient` implementation using the OpenAI-compatible API
//! - A declarative output schema that drives both the format instructions
//!   embedded in the prompt and the validator applied to the completion
//! - Configuration via environment variables
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `SOUSCHEF_AI_MODEL` (optional): Model name, e.g., "meta-llama/llama-3.1-8b-instruct:free"
//! - `SOUSCHEF_AI_BASE_URL` (optional): API base URL
//! - `SOUSCHEF_AI_TIMEOUT_SECS` (optional): Timeout for the remote call in seconds
//!
//! # Example
//!
//! ```ignore
//! use souschef_core::ai::{suggest_recipe, OpenRouterClient};
//!
//! let client = OpenRouterClient::from_env()?;
//! let result = suggest_recipe(&client, "eggs, spinach", "vegetarian").await?;
//! println!("Try: {}", result.suggestion.recipe_name);
//! ```

mod client;
mod config;
mod fake;
pub mod prompts;
mod schema;
mod suggest;
mod types;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError};
pub use fake::FakeClient;
pub use schema::{format_instructions, parse_suggestion, RecipeSuggestion, SchemaError};
pub use suggest::{suggest_recipe, SuggestionResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
