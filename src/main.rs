//! Letter Runner: a side-scrolling letter collecting game
//!
//! Run right and left, jump over ground enemies, dodge the birds, and touch
//! the floating letters for points. Runs natively and in the browser.
//!
//! Controls: arrows or WASD to move and jump, Enter to restart after a game
//! over, F or F11 for full screen, Escape to quit (native only).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod audio;
mod config;
mod game;
mod input;
mod logger;
mod render;

use log::{debug, info, warn, LevelFilter};
use macroquad::prelude::{get_frame_time, next_frame, set_fullscreen, Conf};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use asset::GameAssets;
use config::{ConfigError, GameConfig};
use game::{FrameClock, GameEvent, GameState};
use input::{Command, InputState};
use render::Overlay;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Letter Runner v{}", VERSION),
        window_width: config::FIELD_WIDTH as i32,
        window_height: config::FIELD_HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        // Start windowed on all platforms (WASM: browser handles sizing)
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_config(path: &str) -> Result<GameConfig, ConfigError> {
    GameConfig::load(std::path::Path::new(path))
}

#[cfg(target_arch = "wasm32")]
async fn read_config(path: &str) -> Result<GameConfig, ConfigError> {
    let text = macroquad::file::load_string(path).await.map_err(|e| {
        ConfigError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))
    })?;
    GameConfig::from_ron_str(&text)
}

/// Config from the default asset directory, or defaults. The second value is
/// a notice for the overlay when the file exists but could not be used.
async fn load_config() -> (GameConfig, Option<String>) {
    let defaults = GameConfig::default();
    let path = defaults.config_path();
    match read_config(&path).await {
        Ok(config) => {
            info!("Loaded config from {}", path);
            (config, None)
        }
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path);
            (defaults, None)
        }
        Err(e) => {
            warn!("Ignoring {}: {}", path, e);
            (defaults, Some(format!("Invalid {}, using defaults", path)))
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logger::init(LevelFilter::Info);

    let (config, config_notice) = load_config().await;
    if let Some(level) = logger::parse_level(&config.log_level) {
        logger::init(level);
    }
    match config.to_ron_string() {
        Ok(text) => debug!("Effective config:\n{}", text),
        Err(e) => debug!("Could not print config: {}", e),
    }

    let assets = GameAssets::load(&config).await;

    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    debug!("RNG seed {}", seed);

    let mut clock = FrameClock::new(config.fixed_step_ms);
    if clock.is_fixed() {
        info!("Fixed timestep enabled");
    }
    let mut state = GameState::new(config, &mut rng);
    let mut input = InputState::new();
    let mut overlay = Overlay::new();
    let mut fullscreen = false;

    if let Some(notice) = config_notice.or_else(|| assets.missing_notice()) {
        overlay.show(notice);
    }

    info!("=== Letter Runner v{} ===", VERSION);

    loop {
        input.poll(state.game_over);
        for command in input.drain_commands() {
            match command {
                Command::Restart => {
                    state.restart(&mut rng);
                    clock.reset();
                }
                Command::ToggleFullscreen => {
                    fullscreen = !fullscreen;
                    set_fullscreen(fullscreen);
                    // No way to learn whether the platform honoured it
                    info!("Requested full screen {}", if fullscreen { "on" } else { "off" });
                    overlay.show(if fullscreen { "Full screen (F to leave)" } else { "Windowed" });
                }
                Command::Quit => {
                    if cfg!(not(target_arch = "wasm32")) {
                        info!("Quit");
                        return;
                    }
                }
            }
        }

        let frame_seconds = get_frame_time();
        let (steps, dt_ms) = clock.advance(frame_seconds * 1000.0);
        for _ in 0..steps {
            state.tick(&input.held, dt_ms, &mut rng);
        }

        let events: Vec<GameEvent> = state.events.drain().collect();
        for cue in audio::cues_for(&events, &state.config.features) {
            audio::play(cue, &assets);
        }

        overlay.update(frame_seconds);
        render::draw_frame(&state, &assets, &overlay);

        next_frame().await;
    }
}
