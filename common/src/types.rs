//! レシピ関連の型定義
//!
//! CLIとバックエンドAPIの間で共有される型:
//! - Recipe: バックエンドが生成するレシピ本体
//! - FavoriteEntry: お気に入りに保存される要約
//! - Suggestion / Replacement: 候補一覧・代替食材のレスポンス
//! - *Request: 各エンドポイントへのリクエストボディ

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `null` を既定値として読む（キー欠落は `#[serde(default)]` 側で処理）
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 材料1行（分量文字列 + 材料名）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    #[serde(deserialize_with = "null_as_default")]
    pub measure: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl Ingredient {
    pub fn new(measure: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            measure: measure.into(),
            name: name.into(),
        }
    }
}

/// 栄養値（数値でも文字列でも返ってくる）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Number(n) => write!(f, "{}", n),
            NutrientValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// 栄養情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: Option<NutrientValue>,
    pub protein: Option<NutrientValue>,
    pub carbs: Option<NutrientValue>,
    pub fat: Option<NutrientValue>,
    pub saturated_fat: Option<NutrientValue>,
    pub fiber: Option<NutrientValue>,
    pub sugar: Option<NutrientValue>,
    pub sodium: Option<NutrientValue>,
}

/// バックエンドが返すレシピ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub servings: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    pub nutrition: Option<Nutrition>,
    pub youtube_url: Option<String>,
}

impl Recipe {
    pub const DEFAULT_SERVINGS: u32 = 4;

    /// 元の人数（未設定・0は4人前）
    pub fn base_servings(&self) -> u32 {
        match self.servings {
            Some(n) if n >= 1 => n,
            _ => Self::DEFAULT_SERVINGS,
        }
    }
}

/// お気に入りエントリ（nameが一意キー）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    /// 保存日時（RFC 3339）
    #[serde(rename = "savedAt", default)]
    pub saved_at: String,
}

impl FavoriteEntry {
    /// レシピの表示用フィールドからエントリを作成
    pub fn from_recipe(recipe: &Recipe, saved_at: impl Into<String>) -> Self {
        Self {
            name: recipe.name.clone(),
            image_url: recipe.image_url.clone(),
            category: recipe.category.clone(),
            area: recipe.area.clone(),
            prep_time: recipe.prep_time.clone(),
            cook_time: recipe.cook_time.clone(),
            saved_at: saved_at.into(),
        }
    }
}

/// おすすめ料理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub suggestions: Vec<Suggestion>,
}

/// 代替食材の提案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Replacement {
    pub original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: Vec<String>,
}

/// エラーレスポンス `{detail}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}

/// 食材検索のフィルタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Tasty,
    Healthy,
    Quick,
}

impl FilterType {
    pub const ALL: [FilterType; 3] = [FilterType::Tasty, FilterType::Healthy, FilterType::Quick];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Tasty => "tasty",
            FilterType::Healthy => "healthy",
            FilterType::Quick => "quick",
        }
    }
}

impl std::str::FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tasty" => Ok(FilterType::Tasty),
            "healthy" => Ok(FilterType::Healthy),
            "quick" => Ok(FilterType::Quick),
            _ => Err(format!("Unknown filter: {}. Use tasty, healthy, or quick", s)),
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検索モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// 料理名で検索
    #[default]
    Recipe,
    /// 食材リストから生成
    Parse,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recipe" | "dish" => Ok(SearchMode::Recipe),
            "parse" | "ingredients" => Ok(SearchMode::Parse),
            _ => Err(format!("Unknown mode: {}. Use recipe or parse", s)),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Recipe => write!(f, "recipe"),
            SearchMode::Parse => write!(f, "parse"),
        }
    }
}

/// POST /generate-recipe
#[derive(Debug, Clone, Serialize)]
pub struct DishRequest {
    pub dish_name: String,
}

/// POST /generate-recipe-from-ingredients
#[derive(Debug, Clone, Serialize)]
pub struct IngredientsRequest {
    pub ingredients: String,
    pub filter_type: FilterType,
}

/// POST /suggest-ingredient-replacement
#[derive(Debug, Clone, Serialize)]
pub struct ReplacementRequest {
    pub ingredient: String,
    pub recipe_name: String,
}
