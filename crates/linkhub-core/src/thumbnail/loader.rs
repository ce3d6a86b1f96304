//! Thumbnail loader
//!
//! Each load is a single synchronous attempt: read the file, sniff the
//! format, decode it once to prove it is usable. No retries, no caching.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

use super::types::{Thumbnail, placeholder_html};

/// Resolves image names against an assets directory and loads them
#[derive(Debug, Clone)]
pub struct ThumbnailLoader {
    assets_dir: PathBuf,
}

impl ThumbnailLoader {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Where an image name points; absolute names are used as-is
    pub fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.assets_dir.join(path)
        }
    }

    /// Load an image for display at `display_width` pixels
    pub fn load(&self, name: &str, display_width: u32) -> Result<Thumbnail> {
        let path = self.resolve(name);

        let data = fs::read(&path).map_err(|e| Error::ImageNotFound {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let format = image::guess_format(&data).map_err(|e| Error::ImageNotFound {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let decoded =
            image::load_from_memory_with_format(&data, format).map_err(|e| Error::ImageNotFound {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Thumbnail {
            mime_type: format.to_mime_type(),
            natural_width: decoded.width(),
            natural_height: decoded.height(),
            display_width,
            data,
        })
    }
}

/// Thumbnail markup for a card, or the placeholder if loading fails
pub fn render_thumbnail(loader: &ThumbnailLoader, name: &str, width: u32, alt: &str) -> String {
    match loader.load(name, width) {
        Ok(thumbnail) => thumbnail.to_html(alt),
        Err(e) => {
            debug!(image = %name, error = %e, "Thumbnail unavailable, using placeholder");
            placeholder_html().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let loader = ThumbnailLoader::new("assets");
        assert_eq!(loader.resolve("ocr.png"), PathBuf::from("assets/ocr.png"));

        let temp_dir = TempDir::new().unwrap();
        let absolute = temp_dir.path().join("x.png");
        assert_eq!(loader.resolve(absolute.to_str().unwrap()), absolute);
    }

    #[test]
    fn test_load_png() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "ocr.png", 40, 20);

        let loader = ThumbnailLoader::new(temp_dir.path());
        let thumb = loader.load("ocr.png", 220).unwrap();

        assert_eq!(thumb.mime_type, "image/png");
        assert_eq!(thumb.natural_width, 40);
        assert_eq!(thumb.natural_height, 20);
        assert_eq!(thumb.display_width, 220);
        assert_eq!(thumb.display_height(), 110);
        assert!(thumb.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThumbnailLoader::new(temp_dir.path());

        match loader.load("missing.png", 220) {
            Err(Error::ImageNotFound { path, .. }) => {
                assert_eq!(path, temp_dir.path().join("missing.png"));
            }
            other => panic!("expected ImageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unreadable_format() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.png"), b"definitely not an image").unwrap();

        let loader = ThumbnailLoader::new(temp_dir.path());
        let err = loader.load("notes.png", 220).unwrap_err();
        assert_eq!(err.code(), "E100");
    }

    #[test]
    fn test_load_truncated_png() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "full.png", 8, 8);
        let bytes = fs::read(temp_dir.path().join("full.png")).unwrap();
        fs::write(temp_dir.path().join("cut.png"), &bytes[..bytes.len() / 2]).unwrap();

        let loader = ThumbnailLoader::new(temp_dir.path());
        assert!(loader.load("cut.png", 220).is_err());
    }

    #[test]
    fn test_render_thumbnail_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThumbnailLoader::new(temp_dir.path());

        let html = render_thumbnail(&loader, "yolo.png", 220, "Yolov5");
        assert_eq!(html, "<div class='badge'>img</div>");
    }

    #[test]
    fn test_render_thumbnail_image() {
        let temp_dir = TempDir::new().unwrap();
        write_png(temp_dir.path(), "yolo.png", 10, 10);
        let loader = ThumbnailLoader::new(temp_dir.path());

        let html = render_thumbnail(&loader, "yolo.png", 150, "Yolo \"v5\"");
        assert!(html.starts_with("<img class='thumb' src=\"data:image/png;base64,"));
        assert!(html.contains("width=\"150\""));
        assert!(html.contains("height=\"150\""));
        assert!(html.contains("alt=\"Yolo &quot;v5&quot;\""));
    }
}
