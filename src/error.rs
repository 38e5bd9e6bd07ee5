use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIトークンが設定されていません。`pokedex-ai config --set-api-token YOUR_TOKEN` で設定してください")]
    MissingApiToken,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です（PNG/JPEGのみ）: {0}")]
    UnsupportedFormat(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("カメラ撮影エラー: {0}")]
    CameraCapture(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("辞書エラー: {0}")]
    Lexicon(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
