//! ImageLoader: decodes still images and animated GIFs from disk.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

use crate::core::{normalize_ticks, AssetError, AssetLoader};
use crate::pixel::PixelImage;

/// Decoded animation: per-frame duration in ms plus frames.
type Animation = (u32, Vec<PixelImage>);

/// File-backed asset loader with a per-path cache.
///
/// Loading the same path twice returns frames that share pixel storage.
#[derive(Debug, Default)]
pub struct ImageLoader {
    stills: HashMap<PathBuf, PixelImage>,
    animations: HashMap<PathBuf, Animation>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_len(&self) -> usize {
        self.stills.len() + self.animations.len()
    }
}

impl AssetLoader<PixelImage> for ImageLoader {
    fn load_image(&mut self, path: &Path) -> Result<PixelImage, AssetError> {
        if let Some(img) = self.stills.get(path) {
            return Ok(img.clone());
        }
        let img = image::open(path).map_err(|e| AssetError::unreadable(path, e))?;
        let img = PixelImage::from_rgba(img.to_rgba8());
        log::info!(
            "loaded image {} ({}x{})",
            path.display(),
            img.as_rgba().width(),
            img.as_rgba().height()
        );
        self.stills.insert(path.to_path_buf(), img.clone());
        Ok(img)
    }

    fn load_animation(&mut self, path: &Path) -> Result<Animation, AssetError> {
        if let Some(anim) = self.animations.get(path) {
            return Ok(anim.clone());
        }
        let anim = decode_gif(path)?;
        log::info!(
            "loaded animation {} ({} frames, {}ms/frame)",
            path.display(),
            anim.1.len(),
            anim.0
        );
        self.animations.insert(path.to_path_buf(), anim.clone());
        Ok(anim)
    }
}

/// Decode every frame of a GIF. The frame duration is the first frame's delay.
fn decode_gif(path: &Path) -> Result<Animation, AssetError> {
    let file = File::open(path).map_err(|e| AssetError::unreadable(path, e))?;
    let decoder = GifDecoder::new(BufReader::new(file)).map_err(|e| AssetError::unreadable(path, e))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| AssetError::unreadable(path, e))?;

    let duration_ms = frames
        .first()
        .map(|f| {
            let (numer, denom) = f.delay().numer_denom_ms();
            normalize_ticks(i64::from(numer.checked_div(denom).unwrap_or(0)))
        })
        .unwrap_or(0);

    let frames = frames
        .into_iter()
        .map(|f| PixelImage::from_rgba(f.into_buffer()))
        .collect();
    Ok((duration_ms, frames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unreadable() {
        let mut loader = ImageLoader::new();
        let err = loader
            .load_image(Path::new("/definitely/not/here.png"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));

        let err = loader
            .load_animation(Path::new("/definitely/not/here.gif"))
            .unwrap_err();
        assert!(matches!(err, AssetError::Unreadable { .. }));
        assert_eq!(loader.cached_len(), 0);
    }
}
