//! エラー型定義

use thiserror::Error;

/// 単位変換エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 数値が負・NaN・無限大
    #[error("Invalid Input: {0}")]
    InvalidInput(f64),

    /// 体積と重量の相互変換（密度モデルなし）
    #[error("Cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
