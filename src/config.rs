//! Game configuration
//!
//! Every tuning constant of the game lives here, with defaults matching the
//! shipped feel of the game. Values are per displayed frame and were tuned
//! for a ~60 Hz refresh unless noted as milliseconds.
//!
//! An optional `config.ron` in the asset directory overrides any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Logical width of the play field in pixels
pub const FIELD_WIDTH: f32 = 1300.0;
/// Logical height of the play field in pixels
pub const FIELD_HEIGHT: f32 = 720.0;

/// Name of the optional override file inside the asset directory
pub const CONFIG_FILE: &str = "config.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sprite cell and hitbox size (square)
    pub size: f32,
    /// Horizontal start position (also the restart position)
    pub start_x: f32,
    /// Horizontal speed while a direction is held
    pub run_speed: f32,
    /// Added to vertical velocity every frame
    pub weight: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_impulse: f32,
    /// First animation frame shown at start
    pub start_frame: u32,
    /// Last frame index of the run cycle
    pub max_frame: u32,
    /// Animation rate
    pub fps: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            start_x: 100.0,
            run_speed: 5.0,
            weight: 1.0,
            jump_impulse: -32.0,
            start_frame: 3,
            max_frame: 8,
            fps: 20.0,
        }
    }
}

/// Ground enemy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub max_frame: u32,
    pub fps: f32,
    /// Base spawn interval in milliseconds
    pub interval_ms: f32,
    /// Lower bound of the random extra delay in milliseconds
    pub jitter_min_ms: f32,
    /// Upper bound (exclusive) of the random extra delay in milliseconds
    pub jitter_max_ms: f32,
    /// Horizontal shift of the enemy's collision centre toward the player
    pub hitbox_offset: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: 160.0,
            height: 119.0,
            speed: 8.0,
            max_frame: 5,
            fps: 20.0,
            interval_ms: 1000.0,
            jitter_min_ms: 500.0,
            jitter_max_ms: 1500.0,
            hitbox_offset: 20.0,
        }
    }
}

/// Flying (secondary) enemy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryEnemyConfig {
    /// Size of one cell in the sprite sheet
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Sprite cells are drawn shrunk by this factor
    pub scale_divisor: f32,
    /// Number of flyers placed in the field at start and on restart
    pub initial_wave: usize,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Largest vertical bob per frame
    pub max_curve: f32,
    /// Largest change of the bob phase per frame
    pub max_angle_speed: f32,
    /// Flap cadence is a random whole number of frames in `1..=max_flap_frames`
    pub max_flap_frames: u32,
    /// Last frame index of the flap cycle
    pub max_frame: u32,
    pub interval_ms: f32,
    pub jitter_min_ms: f32,
    pub jitter_max_ms: f32,
    /// Horizontal gap kept free on both sides of the player's start
    /// position when placing the opening wave
    pub start_clearance: f32,
}

impl Default for SecondaryEnemyConfig {
    fn default() -> Self {
        Self {
            sprite_width: 266.0,
            sprite_height: 188.0,
            scale_divisor: 2.5,
            initial_wave: 1,
            min_speed: 1.0,
            max_speed: 5.0,
            max_curve: 7.0,
            max_angle_speed: 0.2,
            max_flap_frames: 3,
            max_frame: 5,
            interval_ms: 4000.0,
            jitter_min_ms: 1000.0,
            jitter_max_ms: 3000.0,
            start_clearance: 200.0,
        }
    }
}

/// Letter collectible tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterConfig {
    pub size: f32,
    pub speed: f32,
    /// Score added per collected letter
    pub award: u32,
    /// Glyphs a new letter is drawn from, uniformly
    pub alphabet: String,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            speed: 5.0,
            award: 50,
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
        }
    }
}

/// Scrolling background tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    pub scroll_speed: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            tile_width: 2400.0,
            tile_height: 720.0,
            scroll_speed: 10.0,
        }
    }
}

/// Optional gameplay features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Flying enemies in addition to the ground wave
    pub secondary_enemies: bool,
    /// Play a cue on every collision
    pub hit_sound: bool,
    /// Play a cue when a letter is collected
    pub collect_sound: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            secondary_enemies: true,
            hit_sound: true,
            collect_sound: true,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub secondary: SecondaryEnemyConfig,
    pub letter: LetterConfig,
    pub background: BackgroundConfig,
    pub features: Features,
    /// Run the simulation in fixed steps of this many milliseconds instead of
    /// once per displayed frame
    pub fixed_step_ms: Option<f32>,
    /// One of "off", "error", "warn", "info", "debug", "trace"
    pub log_level: String,
    /// Directory holding images, sounds and the config file
    pub asset_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            secondary: SecondaryEnemyConfig::default(),
            letter: LetterConfig::default(),
            background: BackgroundConfig::default(),
            features: Features::default(),
            fixed_step_ms: None,
            log_level: "info".to_string(),
            asset_dir: "assets".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text and validate it
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Serialize to pretty RON (logged at startup as the effective config)
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Path of the override file for this config's asset directory
    pub fn config_path(&self) -> String {
        format!("{}/{}", self.asset_dir, CONFIG_FILE)
    }

    /// Ground line for an entity of the given height
    pub fn ground_line(&self, height: f32) -> f32 {
        self.field_height - height
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        }
        fn range(name: &str, min: f32, max: f32) -> Result<(), ConfigError> {
            if min.is_finite() && max.is_finite() && min >= 0.0 && min < max {
                Ok(())
            } else {
                Err(ConfigError::ValidationError(format!(
                    "{} range is empty or negative ({}..{})",
                    name, min, max
                )))
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;

        positive("player.size", self.player.size)?;
        positive("player.run_speed", self.player.run_speed)?;
        positive("player.weight", self.player.weight)?;
        positive("player.fps", self.player.fps)?;
        if self.player.jump_impulse >= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "player.jump_impulse must be negative (upward), got {}",
                self.player.jump_impulse
            )));
        }
        if self.player.size >= self.field_width || self.player.size >= self.field_height {
            return Err(ConfigError::ValidationError(
                "player does not fit inside the field".to_string(),
            ));
        }

        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("enemy.speed", self.enemy.speed)?;
        positive("enemy.fps", self.enemy.fps)?;
        positive("enemy.interval_ms", self.enemy.interval_ms)?;
        range("enemy.jitter", self.enemy.jitter_min_ms, self.enemy.jitter_max_ms)?;

        positive("secondary.sprite_width", self.secondary.sprite_width)?;
        positive("secondary.sprite_height", self.secondary.sprite_height)?;
        positive("secondary.scale_divisor", self.secondary.scale_divisor)?;
        positive("secondary.interval_ms", self.secondary.interval_ms)?;
        range("secondary.speed", self.secondary.min_speed, self.secondary.max_speed)?;
        range(
            "secondary.jitter",
            self.secondary.jitter_min_ms,
            self.secondary.jitter_max_ms,
        )?;
        let clearance = self.secondary.start_clearance;
        if !clearance.is_finite() || clearance < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "secondary.start_clearance must not be negative, got {}",
                clearance
            )));
        }
        if self.secondary.max_flap_frames == 0 {
            return Err(ConfigError::ValidationError(
                "secondary.max_flap_frames must be at least 1".to_string(),
            ));
        }

        positive("letter.size", self.letter.size)?;
        positive("letter.speed", self.letter.speed)?;
        if self.letter.alphabet.chars().next().is_none() {
            return Err(ConfigError::ValidationError(
                "letter.alphabet is empty".to_string(),
            ));
        }

        positive("background.tile_width", self.background.tile_width)?;
        positive("background.tile_height", self.background.tile_height)?;
        positive("background.scroll_speed", self.background.scroll_speed)?;

        if let Some(step) = self.fixed_step_ms {
            positive("fixed_step_ms", step)?;
        }
        if crate::logger::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}
