//! Hugging Face Inference API連携モジュール
//!
//! 画像をJPEGのままPOSTし、ラベルと確信度の配列を受け取る。
//! モデル本体はAPI側に常駐するため、プロセス内で保持するのは
//! 共有HTTPクライアントのみ。

use super::types::Prediction;
use crate::camera::CapturedImage;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use std::time::Duration;

const API_BASE: &str = "https://api-inference.huggingface.co/models";

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// 画像を分類
pub async fn classify(
    image: &CapturedImage,
    config: &Config,
    verbose: bool,
) -> Result<Vec<Prediction>> {
    let token = config.get_api_token()?;
    let url = format!("{}/{}", API_BASE, config.model);

    if verbose {
        println!("  モデル: {}", config.model);
        println!("  送信サイズ: {} bytes", image.jpeg_bytes.len());
    }

    let response = CLIENT
        .post(&url)
        .bearer_auth(token)
        .header("x-wait-for-model", "true")
        .header(reqwest::header::CONTENT_TYPE, "image/jpeg")
        .body(image.jpeg_bytes.clone())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .send()
        .await
        .map_err(|e| PokedexError::ApiCall(format!("分類APIの呼び出しに失敗: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| PokedexError::ApiCall(format!("分類APIレスポンスの読み取りに失敗: {}", e)))?;

    if !status.is_success() {
        return Err(PokedexError::ApiCall(format!(
            "分類APIエラー (status {}): {}",
            status, text
        )));
    }

    if verbose {
        let preview: String = text.chars().take(300).collect();
        println!("  レスポンス: {}", preview);
    }

    parse_predictions(&text)
}

/// レスポンスをパース（確信度の降順に整列）
pub fn parse_predictions(response: &str) -> Result<Vec<Prediction>> {
    // {"error": ...} 形式はAPIエラーとして扱う
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(response) {
        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            return Err(PokedexError::ApiCall(format!("分類APIエラー: {}", message)));
        }
    }

    let mut predictions: Vec<Prediction> = serde_json::from_str(response)
        .map_err(|e| PokedexError::ApiParse(format!("分類結果のパースに失敗: {}", e)))?;

    predictions
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    Ok(predictions)
}
