//! Output schema for recipe suggestions.
//!
//! A single declarative field table drives both the format instructions
//! embedded in the prompt and the validation applied to the completion, so
//! the two can never drift apart.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Expected type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    StringArray,
}

impl FieldType {
    fn display(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::StringArray => "array of strings",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }
}

/// One field of the suggestion schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub description: &'static str,
}

/// The five fields every suggestion must carry, in response order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "recipe_name",
        ty: FieldType::String,
        description: "Name of the suggested recipe",
    },
    FieldSpec {
        name: "required_ingredients",
        ty: FieldType::StringArray,
        description: "List of ingredients needed",
    },
    FieldSpec {
        name: "instructions",
        ty: FieldType::StringArray,
        description: "Step-by-step cooking instructions",
    },
    FieldSpec {
        name: "prep_time",
        ty: FieldType::String,
        description: "Estimated preparation time, e.g. \"20 minutes\"",
    },
    FieldSpec {
        name: "dietary_notes",
        ty: FieldType::String,
        description: "Notes on dietary suitability based on preferences",
    },
];

/// A structured recipe suggestion parsed from the model's completion.
///
/// Always fully populated: parsing either yields all five fields or fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub recipe_name: String,
    pub required_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub dietary_notes: String,
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("completion is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("completion contains no JSON object")]
    NoJsonObject,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field {name} has the wrong type, expected {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("field {0} must not be empty")]
    EmptyField(&'static str),
}

/// Render the schema as prompt-embeddable format instructions.
///
/// Pure function of [`FIELDS`]; deterministic, never fails.
pub fn format_instructions() -> String {
    let mut out = String::from(
        "Respond with a single JSON object and no other text. \
         The object must have exactly these fields:\n",
    );
    for field in FIELDS {
        out.push_str(&format!(
            "- \"{}\" ({}): {}\n",
            field.name,
            field.ty.display(),
            field.description
        ));
    }
    out.push_str("Do not wrap the JSON in markdown formatting.");
    out
}

/// Parse a model completion into a [`RecipeSuggestion`].
///
/// Tolerates markdown code fences and surrounding prose, extra fields, and
/// empty arrays. Fails if the text holds no JSON object, or the object is
/// missing a required field, has a mistyped field, or an empty recipe name.
pub fn parse_suggestion(text: &str) -> Result<RecipeSuggestion, SchemaError> {
    let json_text = extract_json_object(text).ok_or(SchemaError::NoJsonObject)?;

    let value: Value =
        serde_json::from_str(json_text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;

    let object = value.as_object().ok_or(SchemaError::NoJsonObject)?;

    // Validate against the same table the prompt was rendered from.
    for field in FIELDS {
        let field_value = object
            .get(field.name)
            .ok_or(SchemaError::MissingField(field.name))?;
        if !field.ty.matches(field_value) {
            return Err(SchemaError::WrongType {
                name: field.name,
                expected: field.ty.display(),
            });
        }
    }

    let suggestion: RecipeSuggestion =
        serde_json::from_value(value).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;

    if suggestion.recipe_name.trim().is_empty() {
        return Err(SchemaError::EmptyField("recipe_name"));
    }

    Ok(suggestion)
}

/// Find the outermost JSON object in the completion text.
///
/// Models frequently wrap JSON in ```json fences or lead with prose; taking
/// the span from the first `{` to the last `}` handles both.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
