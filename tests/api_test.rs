//! レシピAPIクライアントのテスト
//!
//! wiremock でバックエンドを模擬する

use recipe_lookup::api::RecipeApi;
use recipe_lookup::error::RecipeError;
use recipe_lookup_common::{FilterType, SearchRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pasta_json() -> serde_json::Value {
    json!({
        "name": "Pasta Primavera",
        "category": "Vegetarian",
        "area": "Italian",
        "servings": 2,
        "tags": ["vegetarian"],
        "ingredients": [
            {"measure": "200g", "name": "penne"},
            {"measure": "1 1/2 cups", "name": "vegetables"}
        ],
        "instructions": ["Boil pasta", "Toss with vegetables"],
        "nutrition": {"calories": 480, "protein": "14g", "carbs": "70g", "fat": "12g", "fiber": "6g"}
    })
}

#[tokio::test]
async fn test_generate_recipe_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .and(body_json(json!({"dish_name": "Pasta Primavera"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(pasta_json()))
        .expect(1)
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let recipe = api.generate_recipe("Pasta Primavera").await.unwrap();

    assert_eq!(recipe.name, "Pasta Primavera");
    assert_eq!(recipe.servings, Some(2));
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.instructions[1], "Toss with vegetables");
}

#[tokio::test]
async fn test_generate_from_ingredients_sends_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe-from-ingredients"))
        .and(body_json(json!({"ingredients": "chicken, rice", "filter_type": "healthy"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Chicken Rice Bowl"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let request = SearchRequest::ByIngredients {
        ingredients: "chicken, rice".into(),
        filter: FilterType::Healthy,
    };
    let recipe = api.fetch(&request).await.unwrap();
    assert_eq!(recipe.name, "Chicken Rice Bowl");
    assert_eq!(recipe.base_servings(), 4);
}

#[tokio::test]
async fn test_backend_detail_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Recipe 'Xyz' not found"})),
        )
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let err = api.generate_recipe("Xyz").await.unwrap_err();

    assert!(matches!(err, RecipeError::Backend(_)));
    assert_eq!(err.to_string(), "Recipe 'Xyz' not found");
}

#[tokio::test]
async fn test_backend_error_without_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let err = api.generate_recipe("Soup").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate recipe");
}

#[tokio::test]
async fn test_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": [
                {"name": "Pad Thai", "icon": "🍜"},
                {"name": "Tacos", "icon": "🌮"}
            ]
        })))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let suggestions = api.suggestions().await.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].name, "Pad Thai");
    assert_eq!(suggestions[1].icon, "🌮");
}

#[tokio::test]
async fn test_suggest_replacement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/suggest-ingredient-replacement"))
        .and(body_json(json!({"ingredient": "butter", "recipe_name": "Cookies"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original": "butter",
            "notes": "Use equal amounts.",
            "alternatives": ["coconut oil", "margarine"]
        })))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let replacement = api.suggest_replacement("butter", "Cookies").await.unwrap();
    assert_eq!(replacement.original, "butter");
    assert_eq!(replacement.alternatives, vec!["coconut oil", "margarine"]);
}

#[tokio::test]
async fn test_replacement_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/suggest-ingredient-replacement"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"detail": "busy"})))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let err = api.suggest_replacement("butter", "Cookies").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to get alternatives");
}

#[tokio::test]
async fn test_recipe_with_null_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": null,
            "servings": 2,
            "tags": null,
            "ingredients": [{"measure": "1 cup", "name": "stock"}],
            "instructions": null
        })))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let recipe = api.generate_recipe("Soup").await.unwrap();
    assert!(recipe.name.is_empty());
    assert!(recipe.tags.is_empty());
    assert!(recipe.instructions.is_empty());
    assert_eq!(recipe.ingredients[0].measure, "1 cup");
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let api = RecipeApi::new(server.uri());
    let err = api.generate_recipe("Soup").await.unwrap_err();
    assert!(matches!(err, RecipeError::InvalidResponse(_)), "{:?}", err);
}

#[tokio::test]
async fn test_network_error() {
    // 接続先なし
    let api = RecipeApi::new("http://127.0.0.1:1");
    let err = api.generate_recipe("Soup").await.unwrap_err();
    assert!(matches!(err, RecipeError::Network(_)));
}
