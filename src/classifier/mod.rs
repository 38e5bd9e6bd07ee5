pub mod cache;
mod hf_api;
mod types;

pub use cache::CacheFile;
pub use hf_api::parse_predictions;
pub use types::Prediction;

use crate::camera::CapturedImage;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// 画像を分類（キャッシュ利用あり/なし）
pub async fn classify(
    image: &CapturedImage,
    config: &Config,
    cache_folder: &Path,
    use_cache: bool,
    verbose: bool,
) -> Result<Vec<Prediction>> {
    if !use_cache {
        return hf_api::classify(image, config, verbose).await;
    }

    let mut cache = CacheFile::load(cache_folder);
    let hash = cache::compute_image_hash(&image.jpeg_bytes);

    if let Some(predictions) = cache.get(&hash) {
        if verbose {
            println!("  キャッシュヒット: {}", &hash[..12]);
        }
        return Ok(predictions.to_vec());
    }

    let predictions = hf_api::classify(image, config, verbose).await?;
    cache.insert(
        hash,
        image.file_name.clone(),
        image.jpeg_bytes.len() as u64,
        predictions.clone(),
    );
    cache.save(cache_folder)?;

    Ok(predictions)
}
