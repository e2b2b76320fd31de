//! レシピ生成APIクライアント
//!
//! エンドポイント:
//! - GET  /suggestions
//! - POST /generate-recipe
//! - POST /generate-recipe-from-ingredients
//! - POST /suggest-ingredient-replacement
//!
//! リトライ・キャッシュはしない。タイムアウトもreqwestの既定のまま。

use crate::error::{RecipeError, Result};
use recipe_lookup_common::{
    DishRequest, ErrorDetail, FilterType, IngredientsRequest, Recipe, Replacement,
    ReplacementRequest, SearchRequest, Suggestion, SuggestionsResponse,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const GENERATE_FAILED: &str = "Failed to generate recipe";
const ALTERNATIVES_FAILED: &str = "Failed to get alternatives";

#[derive(Debug, Clone)]
pub struct RecipeApi {
    client: Client,
    base_url: String,
}

impl RecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// おすすめ料理の一覧
    pub async fn suggestions(&self) -> Result<Vec<Suggestion>> {
        let url = self.url("/suggestions");
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RecipeError::Backend(format!(
                "Failed to load suggestions ({})",
                response.status()
            )));
        }

        let body: SuggestionsResponse = response.json().await?;
        Ok(body.suggestions)
    }

    /// 料理名からレシピを生成
    pub async fn generate_recipe(&self, dish_name: &str) -> Result<Recipe> {
        let body = DishRequest {
            dish_name: dish_name.to_string(),
        };
        self.post("/generate-recipe", &body, GENERATE_FAILED).await
    }

    /// 食材リストとフィルタからレシピを生成
    pub async fn generate_from_ingredients(
        &self,
        ingredients: &str,
        filter: FilterType,
    ) -> Result<Recipe> {
        let body = IngredientsRequest {
            ingredients: ingredients.to_string(),
            filter_type: filter,
        };
        self.post("/generate-recipe-from-ingredients", &body, GENERATE_FAILED)
            .await
    }

    /// 検索リクエストに応じて適切なエンドポイントを呼ぶ
    pub async fn fetch(&self, request: &SearchRequest) -> Result<Recipe> {
        match request {
            SearchRequest::ByName(name) => self.generate_recipe(name).await,
            SearchRequest::ByIngredients {
                ingredients,
                filter,
            } => self.generate_from_ingredients(ingredients, *filter).await,
        }
    }

    /// 材料の代替候補
    pub async fn suggest_replacement(
        &self,
        ingredient: &str,
        recipe_name: &str,
    ) -> Result<Replacement> {
        let body = ReplacementRequest {
            ingredient: ingredient.to_string(),
            recipe_name: recipe_name.to_string(),
        };
        let url = self.url("/suggest-ingredient-replacement");
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "replacement request failed");
            return Err(RecipeError::Backend(ALTERNATIVES_FAILED.into()));
        }

        Ok(response.json().await?)
    }

    async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let response = check_status(response, fallback).await?;
        Ok(response.json().await?)
    }
}

/// 非2xxなら `{detail}` を取り出してBackendエラーにする
async fn check_status(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorDetail>()
        .await
        .ok()
        .and_then(|e| e.detail)
        .filter(|d| !d.trim().is_empty());

    tracing::debug!(%status, ?detail, "backend returned an error");
    Err(RecipeError::Backend(
        detail.unwrap_or_else(|| fallback.to_string()),
    ))
}
