//! お気に入りレシピ
//!
//! キー・バリューストアの1スロット（`favoriteRecipes`）に
//! FavoriteEntry の配列をJSONで保存する。
//!
//! - 読み込めない・壊れたデータは空リストとして扱う
//! - 変更のたびに配列全体を書き戻す（read-modify-write）
//! - 複数プロセス間の調停はしない（後勝ち）

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::{FavoriteEntry, Recipe};
use chrono::{SecondsFormat, Utc};
use std::collections::HashSet;

/// 保存先のキー
pub const FAVORITES_KEY: &str = "favoriteRecipes";

/// お気に入りストア
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 保存済みのお気に入り（保存順）
    pub fn list(&self) -> Vec<FavoriteEntry> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        let entries: Vec<FavoriteEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "favorites data is malformed; treating as empty");
                return Vec::new();
            }
        };

        // 同名は先頭のみ
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|entry| seen.insert(entry.name.clone()))
            .collect()
    }

    /// 名前が完全一致するエントリがあるか
    pub fn contains(&self, name: &str) -> bool {
        self.list().iter().any(|fav| fav.name == name)
    }

    /// お気に入りを切り替え、切り替え後に登録状態ならtrue
    pub fn toggle(&mut self, recipe: &Recipe) -> Result<bool> {
        let saved_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.toggle_at(recipe, &saved_at)
    }

    /// 保存日時を指定して切り替え
    pub fn toggle_at(&mut self, recipe: &Recipe, saved_at: &str) -> Result<bool> {
        let mut favorites = self.list();

        let now_favorite = match favorites.iter().position(|fav| fav.name == recipe.name) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(FavoriteEntry::from_recipe(recipe, saved_at));
                true
            }
        };

        self.save(&favorites)?;
        tracing::debug!(name = %recipe.name, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }

    /// 名前で削除、削除したらtrue
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let mut favorites = self.list();
        let before = favorites.len();
        favorites.retain(|fav| fav.name != name);

        if favorites.len() == before {
            return Ok(false);
        }

        self.save(&favorites)?;
        Ok(true)
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn save(&mut self, favorites: &[FavoriteEntry]) -> Result<()> {
        let json = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &json)
    }
}
