//! キー・バリュー永続化の抽象
//!
//! ブラウザのlocalStorage相当。CLIではファイル、テストではメモリ上の実装を使う。

use crate::error::Result;
use std::collections::HashMap;

/// 文字列キー → 文字列値の永続ストア
pub trait KeyValueStore {
    /// 値を取得（未設定・読めない場合はNone）
    fn get(&self, key: &str) -> Option<String>;

    /// 値を丸ごと置き換える
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
