//! 図鑑コレクションモジュール
//!
//! 捕獲した動物を1つのJSONファイルへ追記保存する。
//! 名前をキーに重複登録を防ぐ。更新はファイル全体の読み書きで、
//! 並行書き込みには対応しない（後勝ち）。

use crate::error::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 図鑑の1エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// 表示名（翻訳済み）
    pub name: String,
    /// 捕獲日（DD/MM/YYYY）
    pub date: String,
    /// 確信度の表示文字列（"92%"）
    pub confidence: String,
}

/// コレクションを読み込み
///
/// ファイルがなければ空。壊れたJSONはエラーとして呼び出し元へ返す。
pub fn load(path: &Path) -> Result<Vec<CollectionEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let collection = serde_json::from_str(&content)?;
    Ok(collection)
}

/// 未登録なら追加
///
/// 同名エントリがあれば追加せずfalseを返す。
pub fn save_if_new(path: &Path, name: &str, confidence: &str) -> Result<bool> {
    let mut collection = load(path)?;

    if collection.iter().any(|entry| entry.name == name) {
        return Ok(false);
    }

    collection.push(CollectionEntry {
        name: name.to_string(),
        date: Local::now().format("%d/%m/%Y").to_string(),
        confidence: confidence.to_string(),
    });

    let json = serde_json::to_string_pretty(&collection)?;
    std::fs::write(path, json)?;

    Ok(true)
}

/// スコアを表示用のパーセント文字列へ変換
pub fn format_confidence(score: f64) -> String {
    format!("{}%", (score * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.92), "92%");
        assert_eq!(format_confidence(0.005), "1%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.0), "0%");
    }
}
