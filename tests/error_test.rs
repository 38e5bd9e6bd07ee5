//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use pokedex_ai_rust::camera;
use pokedex_ai_rust::error::PokedexError;
use std::path::Path;

/// 存在しない画像ファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = camera::from_file(Path::new("/nonexistent/path/photo.jpg"), 1024);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, PokedexError::FileNotFound(_)));
}

/// PokedexErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PokedexError::Config("テスト設定エラー".to_string()),
        PokedexError::FileNotFound("photo.jpg".to_string()),
        PokedexError::UnsupportedFormat("notes.txt".to_string()),
        PokedexError::ImageLoad("壊れたファイル".to_string()),
        PokedexError::CameraCapture("撮影コマンド失敗".to_string()),
        PokedexError::ApiCall("API呼び出し失敗".to_string()),
        PokedexError::ApiParse("パース失敗".to_string()),
        PokedexError::Lexicon("辞書が見つからない".to_string()),
        PokedexError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// トークン未設定のメッセージには設定手順が含まれる
#[test]
fn test_missing_api_token_message_has_guidance() {
    let display = format!("{}", PokedexError::MissingApiToken);
    assert!(display.contains("--set-api-token"));
}

/// IOエラーからの変換
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let error: PokedexError = io_error.into();
    assert!(matches!(error, PokedexError::Io(_)));
}

/// JSONエラーからの変換
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: PokedexError = json_error.into();
    assert!(matches!(error, PokedexError::JsonParse(_)));
}
