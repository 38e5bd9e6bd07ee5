//! 翻訳モジュール
//!
//! Google翻訳の非公式エンドポイント（gtx）で表示名を翻訳する。
//! 翻訳元言語は自動判定。翻訳失敗は致命的ではなく、
//! 原文ラベルをそのまま使う。

use crate::error::{PokedexError, Result};
use std::time::Duration;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// テキストを翻訳
pub async fn translate(text: &str, target_lang: &str, timeout_seconds: u64) -> Result<String> {
    let response = CLIENT
        .get(TRANSLATE_URL)
        .query(&[
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", target_lang),
            ("dt", "t"),
            ("q", text),
        ])
        .timeout(Duration::from_secs(timeout_seconds))
        .send()
        .await
        .map_err(|e| PokedexError::ApiCall(format!("翻訳APIの呼び出しに失敗: {}", e)))?;

    if !response.status().is_success() {
        return Err(PokedexError::ApiCall(format!(
            "翻訳APIエラー (status {})",
            response.status()
        )));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| PokedexError::ApiParse(format!("翻訳レスポンスのパースに失敗: {}", e)))?;

    parse_translation(&payload)
        .ok_or_else(|| PokedexError::ApiParse("翻訳レスポンスに訳文がありません".into()))
}

/// 表示名を解決
///
/// 翻訳に成功したら先頭を大文字化して返す。
/// 失敗したら原文ラベルを返す（ユーザーにはエラーを見せない）。
pub async fn display_name(
    label: &str,
    target_lang: &str,
    timeout_seconds: u64,
    verbose: bool,
) -> String {
    match translate(label, target_lang, timeout_seconds).await {
        Ok(translated) => capitalize(&translated),
        Err(e) => {
            if verbose {
                eprintln!("  翻訳失敗、原文を使用: {}", e);
            }
            label.to_string()
        }
    }
}

/// レスポンスから訳文セグメントを連結
fn parse_translation(payload: &serde_json::Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}

/// 先頭1文字を大文字化
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_translation_single_segment() {
        let payload = json!([[["Chat", "tabby cat", null, null]], null, "en"]);
        assert_eq!(parse_translation(&payload), Some("Chat".to_string()));
    }

    #[test]
    fn test_parse_translation_multiple_segments() {
        let payload = json!([[["Golden ", "Golden "], ["retriever", "retriever"]], null, "en"]);
        assert_eq!(
            parse_translation(&payload),
            Some("Golden retriever".to_string())
        );
    }

    #[test]
    fn test_parse_translation_empty() {
        let payload = json!([[], null, "en"]);
        assert_eq!(parse_translation(&payload), None);
    }

    #[test]
    fn test_parse_translation_not_an_array() {
        let payload = json!({"error": "bad request"});
        assert_eq!(parse_translation(&payload), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("chat sauvage"), "Chat sauvage");
        assert_eq!(capitalize("Chat"), "Chat");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éléphant"), "Éléphant");
    }
}
