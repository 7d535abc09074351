//! Sound cues
//!
//! Maps the events of a frame to the cues to play. A cue plays at most once
//! per frame, however many events asked for it.

use log::trace;
use macroquad::audio::play_sound_once;

use crate::asset::GameAssets;
use crate::config::Features;
use crate::game::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Hit,
    Coin,
}

/// Cue for a single event, honoring the sound feature flags
pub fn cue_for(event: &GameEvent, features: &Features) -> Option<Cue> {
    match event {
        GameEvent::Collision(_) if features.hit_sound => Some(Cue::Hit),
        GameEvent::LetterCollected { .. } if features.collect_sound => Some(Cue::Coin),
        _ => None,
    }
}

/// Distinct cues for a frame's events, in first-seen order
pub fn cues_for(events: &[GameEvent], features: &Features) -> Vec<Cue> {
    let mut cues = Vec::new();
    for cue in events.iter().filter_map(|e| cue_for(e, features)) {
        if !cues.contains(&cue) {
            cues.push(cue);
        }
    }
    cues
}

/// Play a cue if its sound was loaded
pub fn play(cue: Cue, assets: &GameAssets) {
    let sound = match cue {
        Cue::Hit => assets.hit.as_ref(),
        Cue::Coin => assets.coin.as_ref(),
    };
    if let Some(sound) = sound {
        trace!("Playing {:?}", cue);
        play_sound_once(sound);
    }
}
