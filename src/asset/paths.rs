//! Asset locations relative to the asset directory

/// The fixed set of single-file assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Player,
    Background,
    Enemy,
    Flyer,
    HitSound,
    CoinSound,
}

impl AssetKind {
    pub fn relative_path(self) -> &'static str {
        match self {
            AssetKind::Player => "images/player.png",
            AssetKind::Background => "images/background.png",
            AssetKind::Enemy => "images/enemy.png",
            AssetKind::Flyer => "images/enemy2.png",
            AssetKind::HitSound => "sounds/hit.wav",
            AssetKind::CoinSound => "sounds/coin.wav",
        }
    }

    /// Full path under `dir`
    pub fn path(self, dir: &str) -> String {
        join(dir, self.relative_path())
    }
}

/// Image for one letter glyph
pub fn letter_path(dir: &str, glyph: char) -> String {
    join(dir, &format!("images/letters/{}.png", glyph))
}

fn join(dir: &str, rel: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        rel.to_string()
    } else {
        format!("{}/{}", dir, rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_dir() {
        assert_eq!(AssetKind::Player.path("assets"), "assets/images/player.png");
        assert_eq!(AssetKind::Flyer.path("assets/"), "assets/images/enemy2.png");
        assert_eq!(AssetKind::HitSound.path(""), "sounds/hit.wav");
        assert_eq!(letter_path("assets", 'Q'), "assets/images/letters/Q.png");
    }
}
