//! End-to-end tests for the suggestion flow through the public API,
//! using the fake client in place of the network.

use souschef_core::{suggest_recipe, AiError, FakeClient};

const TOMATO_SALAD: &str = r#"{"recipe_name":"Tomato Salad","required_ingredients":["tomato","salt"],"instructions":["Slice tomato","Add salt"],"prep_time":"5 minutes","dietary_notes":"Vegan"}"#;

#[tokio::test]
async fn suggest_returns_fully_populated_record() {
    let client = FakeClient::new().with_default_response(TOMATO_SALAD);

    let result = suggest_recipe(&client, "tomato, salt", "vegan")
        .await
        .unwrap();

    assert_eq!(result.suggestion.recipe_name, "Tomato Salad");
    assert_eq!(result.suggestion.required_ingredients, ["tomato", "salt"]);
    assert_eq!(result.suggestion.instructions, ["Slice tomato", "Add salt"]);
    assert_eq!(result.suggestion.prep_time, "5 minutes");
    assert_eq!(result.suggestion.dietary_notes, "Vegan");
}

#[tokio::test]
async fn suggest_accepts_fenced_completion() {
    let fenced = format!("Sure! Here's an idea:\n```json\n{}\n```", TOMATO_SALAD);
    let client = FakeClient::new().with_default_response(&fenced);

    let result = suggest_recipe(&client, "tomato", "").await.unwrap();
    assert_eq!(result.suggestion.recipe_name, "Tomato Salad");
}

#[tokio::test]
async fn suggest_never_returns_partial_record() {
    // Valid JSON, but instructions has the wrong type.
    let client = FakeClient::new().with_default_response(
        r#"{"recipe_name":"Toast","required_ingredients":["bread"],"instructions":"toast it","prep_time":"2 minutes","dietary_notes":""}"#,
    );

    let err = suggest_recipe(&client, "bread", "").await.unwrap_err();
    assert!(matches!(err, AiError::Parse(_)));
}

#[tokio::test]
async fn suggest_with_empty_inputs_is_valid() {
    let client = FakeClient::new().with_default_response(TOMATO_SALAD);

    let result = suggest_recipe(&client, "", "").await;
    assert!(result.is_ok());
}
