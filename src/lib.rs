//! recipe-lookup
//!
//! レシピ生成APIの端末クライアント。
//! ロジックは recipe_lookup_common、通信・永続化・描画はこのクレート。

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod storage;
