//! アプリケーション状態
//!
//! 検索モード・フィルタ・表示中のレシピ・人数を1つの構造体で持つ。
//! ハンドラはこれを受け取って操作する。

use crate::scaler::scale_ingredients;
use crate::types::{FilterType, Ingredient, Recipe, SearchMode};
use thiserror::Error;

/// 検索語が空
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EmptyQuery(pub &'static str);

/// 発行するリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// 料理名で生成
    ByName(String),
    /// 食材リストとフィルタで生成
    ByIngredients { ingredients: String, filter: FilterType },
}

/// 検索語の出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// 入力欄に打ち込まれた
    Typed,
    /// おすすめ・お気に入りから選ばれた
    Picked,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: SearchMode,
    pub filter: FilterType,
    current_recipe: Option<Recipe>,
    original_servings: u32,
    current_servings: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            original_servings: Recipe::DEFAULT_SERVINGS,
            current_servings: Recipe::DEFAULT_SERVINGS,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// 検索語とモードからリクエストを決める
    ///
    /// 食材モードでも、選ばれた料理名は料理名検索になる。
    pub fn plan_search(&self, query: &str, source: QuerySource) -> Result<SearchRequest, EmptyQuery> {
        let query = query.trim();

        if query.is_empty() {
            return Err(match self.mode {
                SearchMode::Recipe => EmptyQuery("Please enter a dish name"),
                SearchMode::Parse => EmptyQuery("Please enter ingredients"),
            });
        }

        match (self.mode, source) {
            (SearchMode::Parse, QuerySource::Typed) => Ok(SearchRequest::ByIngredients {
                ingredients: query.to_string(),
                filter: self.filter,
            }),
            _ => Ok(SearchRequest::ByName(query.to_string())),
        }
    }

    /// 表示中のレシピを置き換え、人数をリセット
    pub fn show_recipe(&mut self, recipe: Recipe) {
        self.original_servings = recipe.base_servings();
        self.current_servings = self.original_servings;
        self.current_recipe = Some(recipe);
    }

    /// 人数を直接指定（1未満は拒否）
    pub fn set_servings(&mut self, servings: u32) -> bool {
        if servings < 1 {
            return false;
        }
        self.current_servings = servings;
        true
    }

    /// 人数を増減（1未満になる場合は何もしない）
    pub fn adjust_servings(&mut self, change: i32) -> bool {
        let next = self.current_servings as i64 + change as i64;
        if next < 1 || next > u32::MAX as i64 {
            return false;
        }
        self.current_servings = next as u32;
        true
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current_recipe.as_ref()
    }

    pub fn original_servings(&self) -> u32 {
        self.original_servings
    }

    pub fn current_servings(&self) -> u32 {
        self.current_servings
    }

    /// 毎回 current / original から計算する（累積しない）
    pub fn ratio(&self) -> f64 {
        self.current_servings as f64 / self.original_servings.max(1) as f64
    }

    /// 現在の人数でスケールした材料
    pub fn scaled_ingredients(&self) -> Vec<Ingredient> {
        self.current_recipe
            .as_ref()
            .map(|recipe| scale_ingredients(&recipe.ingredients, self.ratio()))
            .unwrap_or_default()
    }
}
