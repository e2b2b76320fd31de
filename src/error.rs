use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// 通信失敗（接続できない・タイムアウトなど）
    #[error("Network error: {0}")]
    Network(String),

    /// バックエンドが非2xxを返した（detailをそのまま表示）
    #[error("{0}")]
    Backend(String),

    /// 2xxだが本文を解析できない
    #[error("サーバー応答の解析に失敗しました: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    EmptyQuery(#[from] recipe_lookup_common::EmptyQuery),

    #[error("表示中のレシピがありません")]
    NoRecipe,

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Conversion(#[from] recipe_lookup_common::ConversionError),

    #[error(transparent)]
    Common(#[from] recipe_lookup_common::Error),

    /// 既にPresenterで表示したエラー
    #[error("エラーは表示済みです")]
    Reported,
}

impl RecipeError {
    pub fn reported(_: RecipeError) -> Self {
        RecipeError::Reported
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RecipeError::InvalidResponse(e.to_string())
        } else {
            RecipeError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
