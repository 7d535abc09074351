//! Game assets
//!
//! Every image and sound is optional. Whatever fails to load is logged,
//! remembered in `GameAssets::missing`, and skipped when drawing or playing.
//!
//! ```text
//! assets/
//! ├── config.ron            # optional overrides
//! ├── images/
//! │   ├── player.png        # 200x200 cells, one row
//! │   ├── background.png    # 2400x720 tile
//! │   ├── enemy.png         # 160x119 cells
//! │   ├── enemy2.png        # 266x188 cells
//! │   └── letters/A.png ... Z.png
//! └── sounds/
//!     ├── hit.wav
//!     └── coin.wav
//! ```

mod bundle;
mod paths;

pub use bundle::GameAssets;
