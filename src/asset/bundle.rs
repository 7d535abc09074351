//! Loaded textures and sounds

use std::collections::HashMap;

use log::{info, warn};
use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

use crate::config::GameConfig;
use super::paths::{letter_path, AssetKind};

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    Texture { path: String, message: String },
    Sound { path: String, message: String },
}

impl AssetError {
    pub fn path(&self) -> &str {
        match self {
            AssetError::Texture { path, .. } | AssetError::Sound { path, .. } => path,
        }
    }
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, message } => write!(f, "Texture '{}': {}", path, message),
            AssetError::Sound { path, message } => write!(f, "Sound '{}': {}", path, message),
        }
    }
}

impl std::error::Error for AssetError {}

async fn texture(path: String) -> Result<Texture2D, AssetError> {
    match load_texture(&path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Ok(tex)
        }
        Err(e) => Err(AssetError::Texture { path, message: e.to_string() }),
    }
}

async fn sound(path: String) -> Result<Sound, AssetError> {
    load_sound(&path)
        .await
        .map_err(|e| AssetError::Sound { path, message: e.to_string() })
}

/// Everything the renderer and audio need, each piece optional
#[derive(Default)]
pub struct GameAssets {
    pub player: Option<Texture2D>,
    pub background: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
    pub flyer: Option<Texture2D>,
    pub letters: HashMap<char, Texture2D>,
    pub hit: Option<Sound>,
    pub coin: Option<Sound>,
    /// Paths that failed to load
    pub missing: Vec<String>,
}

impl GameAssets {
    /// No assets at all (everything falls back)
    pub fn empty() -> Self {
        Self::default()
    }

    fn keep<T>(&mut self, result: Result<T, AssetError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to load asset: {}", e);
                self.missing.push(e.path().to_string());
                None
            }
        }
    }

    /// Load every asset under the configured asset directory
    pub async fn load(config: &GameConfig) -> Self {
        let dir = config.asset_dir.as_str();
        let mut assets = Self::empty();

        let result = texture(AssetKind::Player.path(dir)).await;
        assets.player = assets.keep(result);
        let result = texture(AssetKind::Background.path(dir)).await;
        assets.background = assets.keep(result);
        let result = texture(AssetKind::Enemy.path(dir)).await;
        assets.enemy = assets.keep(result);
        let result = texture(AssetKind::Flyer.path(dir)).await;
        assets.flyer = assets.keep(result);

        let mut glyphs: Vec<char> = config.letter.alphabet.chars().collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        for glyph in glyphs {
            let result = texture(letter_path(dir, glyph)).await;
            if let Some(tex) = assets.keep(result) {
                assets.letters.insert(glyph, tex);
            }
        }

        if config.features.hit_sound {
            let result = sound(AssetKind::HitSound.path(dir)).await;
            assets.hit = assets.keep(result);
        }
        if config.features.collect_sound {
            let result = sound(AssetKind::CoinSound.path(dir)).await;
            assets.coin = assets.keep(result);
        }

        info!(
            "Assets loaded from '{}' ({} letter images, {} missing)",
            dir,
            assets.letters.len(),
            assets.missing.len()
        );
        assets
    }

    /// One-line summary for the overlay, if anything is missing
    pub fn missing_notice(&self) -> Option<String> {
        match self.missing.len() {
            0 => None,
            1 => Some(format!("Missing asset: {}", self.missing[0])),
            n => Some(format!("{} assets missing, see log", n)),
        }
    }
}
