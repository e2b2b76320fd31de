//! ユーザー操作のハンドラ
//!
//! 状態（AppState）・APIクライアント・お気に入り・描画先をまとめて持ち、
//! 1操作につき最大1回のHTTP呼び出しを行う。
//! エラーは Presenter::show_error で表示したうえで呼び出し元にも返す。

use crate::api::RecipeApi;
use crate::error::{RecipeError, Result};
use recipe_lookup_common::{
    units, AppState, FavoriteEntry, FavoritesStore, KeyValueStore, Presenter, QuerySource,
    Recipe, RecipeScreen, RecipeView, Suggestion,
};

const ALTERNATIVES_ERROR: &str = "Could not fetch alternatives. Please try again.";
const SERVINGS_INVALID: &str = "人数は1以上で指定してください";

pub struct App<S: KeyValueStore, P: Presenter> {
    api: RecipeApi,
    favorites: FavoritesStore<S>,
    presenter: P,
    pub state: AppState,
}

impl<S: KeyValueStore, P: Presenter> App<S, P> {
    pub fn new(api: RecipeApi, store: S, presenter: P, state: AppState) -> Self {
        Self {
            api,
            favorites: FavoritesStore::new(store),
            presenter,
            state,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    /// おすすめ一覧を読み込んで表示
    ///
    /// 失敗はPresenterには出さずログのみ。空の一覧は成功として表示する。
    pub async fn load_suggestions(&mut self) -> Result<Vec<Suggestion>> {
        match self.api.suggestions().await {
            Ok(suggestions) => {
                self.presenter.show_suggestions(&suggestions);
                Ok(suggestions)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load suggestions");
                Err(e)
            }
        }
    }

    /// 検索してレシピを表示
    ///
    /// 後から完了した検索の結果が表示中のレシピを上書きする。
    pub async fn search(&mut self, query: &str, source: QuerySource) -> Result<&Recipe> {
        self.search_with_servings(query, source, None).await
    }

    /// 検索して、指定の人数で表示（描画は1回）
    pub async fn search_with_servings(
        &mut self,
        query: &str,
        source: QuerySource,
        servings: Option<u32>,
    ) -> Result<&Recipe> {
        if servings == Some(0) {
            return Err(self.report(RecipeError::Input(SERVINGS_INVALID.into())));
        }

        let request = match self.state.plan_search(query, source) {
            Ok(request) => request,
            Err(e) => return Err(self.report(e.into())),
        };

        tracing::info!(?request, "searching recipe");
        match self.api.fetch(&request).await {
            Ok(recipe) => {
                self.state.show_recipe(recipe);
                if let Some(n) = servings {
                    self.state.set_servings(n);
                }
                self.render();
                self.state.current_recipe().ok_or(RecipeError::NoRecipe)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// 表示中のレシピを現在の人数で描画
    pub fn render(&mut self) {
        let Some(recipe) = self.state.current_recipe() else {
            return;
        };

        let view = RecipeView::from_recipe(recipe);
        let favorited = self.favorites.contains(&recipe.name);
        let ingredients = self.state.scaled_ingredients();

        self.presenter.show_recipe(&RecipeScreen {
            view: &view,
            ingredients: &ingredients,
            servings: self.state.current_servings(),
            favorited,
        });
    }

    /// 人数を増減して再描画（1未満は無視）
    pub fn adjust_servings(&mut self, change: i32) -> bool {
        if self.state.current_recipe().is_none() || !self.state.adjust_servings(change) {
            return false;
        }
        self.render();
        true
    }

    pub fn set_servings(&mut self, servings: u32) -> bool {
        if self.state.current_recipe().is_none() || !self.state.set_servings(servings) {
            return false;
        }
        self.render();
        true
    }

    /// 表示中のレシピのお気に入りを切り替え
    pub fn toggle_favorite(&mut self) -> Result<bool> {
        let recipe = match self.state.current_recipe() {
            Some(recipe) => recipe.clone(),
            None => return Err(self.report(RecipeError::NoRecipe)),
        };

        match self.favorites.toggle(&recipe) {
            Ok(now_favorite) => Ok(now_favorite),
            Err(e) => Err(self.report(e.into())),
        }
    }

    pub fn remove_favorite(&mut self, name: &str) -> Result<bool> {
        match self.favorites.remove(name) {
            Ok(removed) => Ok(removed),
            Err(e) => Err(self.report(e.into())),
        }
    }

    /// お気に入り一覧を表示
    pub fn show_favorites(&mut self) -> Vec<FavoriteEntry> {
        let favorites = self.favorites.list();
        self.presenter.show_favorites(&favorites);
        favorites
    }

    /// 表示中のレシピの材料について代替候補を表示
    pub async fn show_alternatives(&mut self, ingredient: &str) -> Result<()> {
        let recipe_name = match self.state.current_recipe() {
            Some(recipe) => recipe.name.clone(),
            None => return Err(self.report(RecipeError::NoRecipe)),
        };

        match self.api.suggest_replacement(ingredient, &recipe_name).await {
            Ok(replacement) => {
                self.presenter.show_alternatives(&replacement);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "replacement lookup failed");
                self.presenter.show_error(ALTERNATIVES_ERROR);
                Err(e)
            }
        }
    }

    /// 単位変換して表示
    pub fn convert_units(&mut self, value: f64, from: &str, to: &str) -> Result<String> {
        match units::convert(value, from, to) {
            Ok(result) => {
                self.presenter.show_conversion(&result);
                Ok(result)
            }
            Err(e) => Err(self.report(e.into())),
        }
    }

    fn report(&mut self, error: RecipeError) -> RecipeError {
        self.presenter.show_error(&error.to_string());
        error
    }
}
