use serde::{Deserialize, Serialize};

/// 分類結果（ラベルと確信度）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,

    #[serde(default)]
    pub score: f64,
}
