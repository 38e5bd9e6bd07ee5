//! 画像取得モジュール
//!
//! ファイル指定またはカメラコマンド経由で1枚の画像を取得し、
//! API送信用のJPEGへ整形する。

use crate::config::Config;
use crate::error::{PokedexError, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;
use std::process::Command;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// 取得済み画像（API送信用JPEG）
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub jpeg_bytes: Vec<u8>,
}

/// ファイルから画像を読み込み
pub fn from_file(path: &Path, max_size: u32) -> Result<CapturedImage> {
    if !path.exists() {
        return Err(PokedexError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.iter().any(|&e| e == ext) {
        return Err(PokedexError::UnsupportedFormat(path.display().to_string()));
    }

    let img = image::open(path)
        .map_err(|e| PokedexError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    prepare(img, file_name, max_size)
}

/// カメラコマンドで撮影してから読み込み
pub fn capture(config: &Config) -> Result<CapturedImage> {
    let command = config.camera_command.as_deref().ok_or_else(|| {
        PokedexError::CameraCapture(
            "カメラコマンドが設定されていません。`pokedex-ai config --set-camera-command \"fswebcam -r 1280x720\"` で設定してください".into(),
        )
    })?;

    let output_path =
        std::env::temp_dir().join(format!("pokedex-capture-{}.jpg", std::process::id()));

    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| PokedexError::CameraCapture("カメラコマンドが空です".into()))?;

    // 撮影先パスは最後の引数として渡す
    let output = Command::new(program)
        .args(parts)
        .arg(&output_path)
        .output()
        .map_err(|e| PokedexError::CameraCapture(format!("{}: {}", program, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PokedexError::CameraCapture(format!(
            "撮影コマンド失敗 (code {:?}): {}",
            output.status.code(),
            stderr
        )));
    }

    from_file(&output_path, config.max_image_size)
}

/// 縮小してJPEGへ再エンコード
fn prepare(img: DynamicImage, file_name: String, max_size: u32) -> Result<CapturedImage> {
    let img = if img.width().max(img.height()) > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEGはアルファ非対応のためRGBへ変換
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let (width, height) = (rgb.width(), rgb.height());

    let mut jpeg_bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg_bytes), image::ImageFormat::Jpeg)
        .map_err(|e| PokedexError::ImageLoad(format!("JPEGエンコード失敗: {}", e)))?;

    Ok(CapturedImage {
        file_name,
        width,
        height,
        jpeg_bytes,
    })
}

#[cfg(test)]
fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("gif"));
        assert!(!is_image_extension("bmp"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = from_file(Path::new("/nonexistent/image.jpg"), 1024);
        assert!(matches!(result, Err(PokedexError::FileNotFound(_))));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let dir = std::env::temp_dir().join("pokedex-test-ext");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let result = from_file(&path, 1024);
        assert!(matches!(result, Err(PokedexError::UnsupportedFormat(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_prepare_resizes_and_encodes() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(200, 100));
        let captured = prepare(img, "test.png".to_string(), 50).unwrap();

        assert_eq!(captured.file_name, "test.png");
        assert!(captured.width <= 50 && captured.height <= 50);
        assert!(!captured.jpeg_bytes.is_empty());
        // JPEGマジックバイト
        assert_eq!(&captured.jpeg_bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_prepare_keeps_small_images() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(64, 48));
        let captured = prepare(img, "small.jpg".to_string(), 1024).unwrap();

        assert_eq!(captured.width, 64);
        assert_eq!(captured.height, 48);
    }
}
