//! 捕獲提案モジュール
//!
//! 動物と判定された対象について確信度を表示し、
//! しきい値を超えていれば捕獲（図鑑登録）を提案する。

use crate::error::{PokedexError, Result};
use crate::pokedex;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// 捕獲可能になる確信度のしきい値（これを超えたら捕獲を提案）
pub const CATCH_THRESHOLD: f64 = 0.4;

/// 捕獲可能かどうか
pub fn is_catchable(score: f64) -> bool {
    score > CATCH_THRESHOLD
}

/// 確信度をバー表示
pub fn show_confidence(score: f64) {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("  確信度 [{bar:40.green}] {pos}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_position((score * 100.0).round() as u64);
    bar.abandon();
}

/// 捕獲を提案し、承諾されたら図鑑へ登録
///
/// 確信度がしきい値以下の場合は提案せずに終了する。
pub fn offer_capture(name: &str, score: f64, data_file: &Path, assume_yes: bool) -> Result<()> {
    println!("✅ 検出された種: {}", name);
    show_confidence(score);

    if !is_catchable(score) {
        return Ok(());
    }

    let catch = if assume_yes {
        true
    } else {
        Confirm::new()
            .with_prompt("🔴 捕獲しますか？")
            .default(false)
            .interact()
            .map_err(|e| PokedexError::Prompt(e.to_string()))?
    };

    if !catch {
        return Ok(());
    }

    if pokedex::save_if_new(data_file, name, &pokedex::format_confidence(score))? {
        println!("🎉 図鑑に追加しました！");
    } else {
        println!("⚠️  すでに捕獲済みです！");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_catchable_above_threshold() {
        assert!(is_catchable(0.92));
        assert!(is_catchable(0.41));
    }

    #[test]
    fn test_is_catchable_at_or_below_threshold() {
        // しきい値ちょうどは捕獲不可
        assert!(!is_catchable(0.4));
        assert!(!is_catchable(0.35));
        assert!(!is_catchable(0.0));
    }
}
