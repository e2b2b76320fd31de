//! 描画インターフェース
//!
//! ロジック側はこのトレイトだけを呼び、描画先（端末など）には依存しない。

use crate::types::{FavoriteEntry, Ingredient, Replacement, Suggestion};
use crate::view::RecipeView;

/// レシピ表示に渡す一式
#[derive(Debug, Clone)]
pub struct RecipeScreen<'a> {
    pub view: &'a RecipeView,
    /// 現在の人数でスケール済みの材料
    pub ingredients: &'a [Ingredient],
    pub servings: u32,
    pub favorited: bool,
}

pub trait Presenter {
    fn show_suggestions(&mut self, suggestions: &[Suggestion]);

    fn show_recipe(&mut self, screen: &RecipeScreen<'_>);

    /// 一時的なエラーメッセージ
    fn show_error(&mut self, message: &str);

    fn show_alternatives(&mut self, replacement: &Replacement);

    fn show_favorites(&mut self, favorites: &[FavoriteEntry]);

    fn show_conversion(&mut self, result: &str);
}
