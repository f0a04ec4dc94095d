//! Texture asset loading: maps texture keys to image files on disk and
//! decodes them into GPU-ready RGBA pixel data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use orrery_scene::TextureKey;
use thiserror::Error;

/// Errors returned while loading texture assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The texture file could not be read.
    #[error("failed to read texture file {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The texture file could not be decoded as an image.
    #[error("failed to decode texture file {path}: {source}")]
    ImageDecode {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
}

/// File name on disk for a texture key, relative to the texture directory.
pub fn file_name(key: TextureKey) -> &'static str {
    match key {
        TextureKey::Sun => "sun.jpg",
        TextureKey::Mercury => "mercury.jpg",
        TextureKey::Venus => "venus.jpg",
        TextureKey::Earth => "earth.jpg",
        TextureKey::Mars => "mars.jpg",
        TextureKey::Jupiter => "jupiter.jpg",
        TextureKey::Saturn => "saturn.jpg",
        TextureKey::SaturnRing => "saturn_ring.png",
        TextureKey::Uranus => "uranus.jpg",
        TextureKey::Neptune => "neptune.jpg",
        TextureKey::Asteroid => "asteroid.jpg",
        TextureKey::Backdrop => "milky-way-galaxy.jpg",
    }
}

/// A decoded texture ready for GPU upload.
#[derive(Debug)]
pub struct TextureImage {
    /// RGBA8 pixel data, tightly packed.
    pub pixels: Vec<u8>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

/// All decoded textures, keyed by [`TextureKey`].
#[derive(Debug)]
pub struct TextureSources {
    images: HashMap<TextureKey, TextureImage>,
}

impl TextureSources {
    /// Load and decode every texture from `dir`.
    ///
    /// Images are flipped vertically during decode so their UV origin matches
    /// the mesh generators. Fails on the first missing or undecodable file,
    /// naming the offending path.
    pub fn load_all(dir: &Path) -> Result<Self, AssetError> {
        let mut images = HashMap::new();

        for key in TextureKey::ALL {
            let path = dir.join(file_name(key));
            let image = load_one(&path)?;
            log::info!(
                "Loaded texture {} ({}x{})",
                path.display(),
                image.width,
                image.height
            );
            images.insert(key, image);
        }

        Ok(Self { images })
    }

    /// Get the decoded image for a key. All keys are present after a
    /// successful [`load_all`](Self::load_all).
    pub fn get(&self, key: TextureKey) -> Option<&TextureImage> {
        self.images.get(&key)
    }

    /// Number of loaded textures.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no textures are loaded.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn load_one(path: &Path) -> Result<TextureImage, AssetError> {
    // image::open reads the file itself, so stat first to separate a missing
    // file from a corrupt one in the error message.
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?
        .flipv()
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    Ok(TextureImage {
        pixels: decoded.into_raw(),
        width,
        height,
    })
}
