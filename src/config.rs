use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_token: Option<String>,
    pub model: String,
    pub target_lang: String,
    pub wordnet_dir: Option<PathBuf>,
    pub data_file: PathBuf,
    pub camera_command: Option<String>,
    pub max_image_size: u32,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PokedexError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pokedex-ai").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_token: None,
            model: "google/vit-base-patch16-224".into(),
            target_lang: "fr".into(),
            wordnet_dir: None,
            data_file: PathBuf::from("pokedex_data.json"),
            camera_command: None,
            max_image_size: 1024,  // アップロード前の縮小上限
            timeout_seconds: 120,
        }
    }

    pub fn get_api_token(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(token) = std::env::var("HF_API_TOKEN") {
            return Ok(token);
        }

        self.api_token.clone().ok_or(PokedexError::MissingApiToken)
    }

    pub fn get_wordnet_dir(&self) -> Result<PathBuf> {
        // 環境変数を優先（WordNet標準のWNSEARCHDIR）
        if let Ok(dir) = std::env::var("WNSEARCHDIR") {
            return Ok(PathBuf::from(dir));
        }

        self.wordnet_dir.clone().ok_or_else(|| {
            PokedexError::Lexicon(
                "WordNet辞書ディレクトリが設定されていません。`pokedex-ai config --set-wordnet-dir PATH` で設定してください".into(),
            )
        })
    }

    pub fn set_api_token(&mut self, token: String) -> Result<()> {
        self.api_token = Some(token);
        self.save()
    }

    pub fn set_target_lang(&mut self, lang: String) -> Result<()> {
        self.target_lang = lang;
        self.save()
    }

    pub fn set_wordnet_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.wordnet_dir = Some(dir);
        self.save()
    }

    pub fn set_camera_command(&mut self, command: String) -> Result<()> {
        self.camera_command = Some(command);
        self.save()
    }
}
