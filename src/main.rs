use clap::Parser;
use pokedex_ai_rust::{camera, classifier, cli, config, encounter, error, lexicon, pokedex, translator};
use cli::{Cli, Commands};
use config::Config;
use error::{PokedexError, Result};
use lexicon::Lexicon;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Catch { image, camera: use_camera, yes, use_cache } => {
            println!("🦁 pokedex-ai - 動物判定\n");

            // 1. 画像取得
            println!("[1/4] 画像を取得中...{}", if use_camera { " (カメラ)" } else { "" });
            let captured = if use_camera {
                camera::capture(&config)?
            } else {
                let path = image.ok_or_else(|| {
                    PokedexError::Config("画像ファイルを指定するか --camera を使用してください".into())
                })?;
                camera::from_file(&path, config.max_image_size)?
            };
            println!("✔ {} ({}x{})\n", captured.file_name, captured.width, captured.height);

            // 2. AI分類（最上位の結果だけを使う）
            println!("[2/4] AI分類中...{}", if use_cache { " (キャッシュ有効)" } else { "" });
            let cache_folder = std::env::current_dir()?;
            let predictions =
                classifier::classify(&captured, &config, &cache_folder, use_cache, cli.verbose)
                    .await?;
            let top = predictions
                .first()
                .ok_or_else(|| PokedexError::ApiParse("分類結果が空です".into()))?;
            println!("✔ 分類完了: {} ({})\n", top.label, pokedex::format_confidence(top.score));

            // 3. 動物判定
            println!("[3/4] 動物判定中...");
            let lexicon = Lexicon::load(&config.get_wordnet_dir()?)?;
            if !lexicon.is_animal(&top.label) {
                println!("❌ 検出されたもの: {}", top.label);
                println!("⚠️  動物ではありません！図鑑への登録を拒否しました");
                return Ok(());
            }
            println!("✔ 動物と判定\n");

            // 4. 翻訳して捕獲を提案
            println!("[4/4] 表示名を翻訳中...\n");
            let name = translator::display_name(
                &top.label,
                &config.target_lang,
                config.timeout_seconds,
                cli.verbose,
            )
            .await;

            encounter::offer_capture(&name, top.score, &config.data_file, yes)?;
        }

        Commands::Collection => {
            let collection = pokedex::load(&config.data_file)?;

            println!("📖 マイコレクション ({}匹)", collection.len());
            // 新しい順に表示
            for entry in collection.iter().rev() {
                println!("- {} ({})", entry.name, entry.confidence);
            }
        }

        Commands::Check { label } => {
            let lexicon = Lexicon::load(&config.get_wordnet_dir()?)?;
            let lemma = lexicon::normalize_label(&label);

            println!("正規化: {} → {}", label, lemma);
            println!("語義数: {}", lexicon.senses_of(&lemma).len());

            if lexicon.is_animal(&label) {
                println!("✅ 動物です");
            } else {
                println!("❌ 動物ではありません");
            }
        }

        Commands::Config { set_api_token, set_target_lang, set_wordnet_dir, set_camera_command, show } => {
            let mut config = config;

            if let Some(token) = set_api_token {
                config.set_api_token(token)?;
                println!("✔ APIトークンを設定しました");
            }
            if let Some(lang) = set_target_lang {
                config.set_target_lang(lang)?;
                println!("✔ 翻訳先言語を設定しました");
            }
            if let Some(dir) = set_wordnet_dir {
                config.set_wordnet_dir(dir)?;
                println!("✔ WordNet辞書ディレクトリを設定しました");
            }
            if let Some(command) = set_camera_command {
                config.set_camera_command(command)?;
                println!("✔ カメラコマンドを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  翻訳先言語: {}", config.target_lang);
                println!("  データファイル: {}", config.data_file.display());
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIトークン: {}",
                    if config.api_token.is_some() { "設定済み" } else { "未設定" }
                );
                println!(
                    "  WordNet辞書: {}",
                    match &config.wordnet_dir {
                        Some(dir) => dir.display().to_string(),
                        None => "未設定".to_string(),
                    }
                );
                println!(
                    "  カメラコマンド: {}",
                    config.camera_command.as_deref().unwrap_or("未設定")
                );
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| std::path::PathBuf::from("."));
            let cache_path = classifier::CacheFile::cache_path(&target);

            if info || !clear {
                // デフォルトまたは--info: 情報表示
                if cache_path.exists() {
                    let cache = classifier::CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match classifier::CacheFile::clear(&target) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}
