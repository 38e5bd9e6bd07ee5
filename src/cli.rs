use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex-ai")]
#[command(about = "動物判定ポケモン図鑑CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を分類して、動物なら図鑑への捕獲を試みる
    Catch {
        /// 画像ファイルのパス（PNG/JPEG）
        image: Option<PathBuf>,

        /// カメラで撮影（設定のcamera_commandを使用）
        #[arg(short, long)]
        camera: bool,

        /// 確認なしで捕獲
        #[arg(short, long)]
        yes: bool,

        /// キャッシュを使用（再分類をスキップ）
        #[arg(long)]
        use_cache: bool,
    },

    /// 図鑑のコレクションを表示
    Collection,

    /// ラベルが動物かどうかだけを判定
    Check {
        /// 判定するラベル（例: "Golden retriever"）
        #[arg(required = true)]
        label: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIトークンを設定
        #[arg(long)]
        set_api_token: Option<String>,

        /// 翻訳先言語を設定（例: fr, ja）
        #[arg(long)]
        set_target_lang: Option<String>,

        /// WordNet辞書ディレクトリを設定
        #[arg(long)]
        set_wordnet_dir: Option<PathBuf>,

        /// カメラ撮影コマンドを設定
        #[arg(long)]
        set_camera_command: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}
