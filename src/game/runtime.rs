//! Game Runtime
//!
//! `GameState` owns everything that changes while playing. The frame loop
//! feeds it held directions and elapsed time through `tick`, drains the
//! events it raised, and hands it to the renderer read-only.
//!
//! A tick runs the systems in a fixed order: background, player (against the
//! enemy positions of the previous frame), ground enemies, flying enemies,
//! letter. Once the run ends further ticks do nothing until `restart`.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::input::HeldDirections;
use super::background::Background;
use super::enemy::{Enemy, EnemyKind, SecondaryEnemy};
use super::event::{EventQueue, GameEvent};
use super::letter::{Letter, LetterOutcome};
use super::player::Player;
use super::spawner::SpawnTimer;

pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub background: Background,
    pub enemies: Vec<Enemy>,
    pub flyers: Vec<SecondaryEnemy>,
    /// At most one letter is alive; `None` means a new one is due
    pub letter: Option<Letter>,
    pub score: u32,
    pub game_over: bool,
    /// Simulated frames since start or restart
    pub frame: u64,
    pub enemy_timer: SpawnTimer,
    pub flyer_timer: SpawnTimer,
    pub events: EventQueue<GameEvent>,
}

impl GameState {
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let e = &config.enemy;
        let s = &config.secondary;
        let enemy_timer = SpawnTimer::new(e.interval_ms, e.jitter_min_ms, e.jitter_max_ms, rng);
        let flyer_timer = SpawnTimer::new(s.interval_ms, s.jitter_min_ms, s.jitter_max_ms, rng);
        let mut state = Self {
            player: Player::new(&config),
            background: Background::new(&config.background),
            enemies: Vec::new(),
            flyers: Vec::new(),
            letter: None,
            score: 0,
            game_over: false,
            frame: 0,
            enemy_timer,
            flyer_timer,
            events: EventQueue::new(),
            config,
        };
        state.place_opening_wave(rng);
        state
    }

    fn place_opening_wave<R: Rng>(&mut self, rng: &mut R) {
        self.flyers.clear();
        if self.config.features.secondary_enemies {
            for _ in 0..self.config.secondary.initial_wave {
                self.flyers.push(SecondaryEnemy::spawn_in_field(&self.config, rng));
            }
        }
    }

    /// Reset everything to the state of a fresh run
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.player.restart();
        self.background.restart();
        self.enemies.clear();
        self.letter = None;
        self.score = 0;
        self.game_over = false;
        self.frame = 0;
        self.enemy_timer.reset(rng);
        self.flyer_timer.reset(rng);
        self.place_opening_wave(rng);
        self.events.clear();
        self.events.send(GameEvent::Restarted);
        info!("Run restarted");
    }

    /// Advance the simulation by one step of `dt_ms`.
    /// Returns true if the run ended during this step.
    pub fn tick<R: Rng>(&mut self, held: &HeldDirections, dt_ms: f32, rng: &mut R) -> bool {
        if self.game_over {
            return false;
        }

        self.background.update();

        let hazards = self.player.update(held, dt_ms, &self.enemies, &self.flyers);
        let hit = !hazards.is_empty();
        for hazard in hazards {
            debug!("Collision with {:?} at frame {}", hazard, self.frame);
            self.events.send(GameEvent::Collision(hazard));
        }

        self.update_enemies(dt_ms, rng);
        if self.config.features.secondary_enemies {
            self.update_flyers(dt_ms, rng);
        }
        self.update_letter(rng);

        self.frame += 1;

        if hit {
            self.game_over = true;
            self.events.send(GameEvent::GameOver { score: self.score });
            info!("Game over with score {} after {} frames", self.score, self.frame);
        }
        hit
    }

    fn update_enemies<R: Rng>(&mut self, dt_ms: f32, rng: &mut R) {
        if self.enemy_timer.tick(dt_ms, rng) {
            self.enemies.push(Enemy::new(&self.config));
            self.events.send(GameEvent::EnemySpawned(EnemyKind::Ground));
        }
        self.enemies.retain_mut(|enemy| enemy.update(dt_ms));
    }

    fn update_flyers<R: Rng>(&mut self, dt_ms: f32, rng: &mut R) {
        if self.flyer_timer.tick(dt_ms, rng) {
            self.flyers.push(SecondaryEnemy::spawn_at_edge(&self.config, rng));
            self.events.send(GameEvent::EnemySpawned(EnemyKind::Flying));
        }
        let frame = self.frame;
        self.flyers.retain_mut(|flyer| flyer.update(frame));
    }

    fn update_letter<R: Rng>(&mut self, rng: &mut R) {
        let mut letter = match self.letter.take() {
            Some(letter) => letter,
            None => Letter::random(&self.config, rng),
        };
        match letter.update(&self.player.bounds()) {
            LetterOutcome::Moving => self.letter = Some(letter),
            LetterOutcome::Collected => {
                self.score = self.score.saturating_add(self.config.letter.award);
                debug!("Collected '{}', score {}", letter.glyph, self.score);
                self.events.send(GameEvent::LetterCollected {
                    glyph: letter.glyph,
                    score: self.score,
                });
            }
            LetterOutcome::Escaped => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::Hazard;
    use crate::input::Direction;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.features.secondary_enemies = false;
        config
    }

    fn game(config: GameConfig, seed: u64) -> (GameState, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = GameState::new(config, &mut rng);
        (state, rng)
    }

    fn count_game_overs(state: &mut GameState) -> usize {
        let events: Vec<_> = state.events.drain().collect();
        count_game_overs_in(&events)
    }

    fn count_game_overs_in(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count()
    }

    #[test]
    fn test_fresh_state() {
        let (state, _) = game(GameConfig::default(), 1);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.frame, 0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.flyers.len(), 1, "opening wave of one flyer");
        assert!(state.letter.is_none());
    }

    #[test]
    fn test_approaching_enemy_ends_run_exactly_once() {
        let (mut state, mut rng) = game(quiet_config(), 2);
        state.enemy_timer.interval_ms = 1.0e9;
        state.enemies.push(Enemy::new(&state.config));
        let idle = HeldDirections::new();

        let mut game_overs = 0;
        let mut ended_at = None;
        for i in 0..400 {
            if state.tick(&idle, 16.0, &mut rng) {
                ended_at.get_or_insert(i);
            }
            game_overs += count_game_overs(&mut state);
        }
        assert_eq!(game_overs, 1);
        assert!(state.game_over);

        // Enemy checked at its previous position: it hits once its offset
        // centre is within 120px of the player's, i.e. x < ~258
        let frames = ended_at.expect("enemy should reach the player");
        assert!(frames > 100 && frames < 140, "ended at frame {}", frames);
    }

    #[test]
    fn test_simulation_frozen_after_game_over() {
        let (mut state, mut rng) = game(quiet_config(), 3);
        state.game_over = true;
        let before_frame = state.frame;
        let before_bg = state.background.x;
        assert!(!state.tick(&HeldDirections::with(&[Direction::Right]), 16.0, &mut rng));
        assert_eq!(state.frame, before_frame);
        assert_eq!(state.background.x, before_bg);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_running_off_the_left_edge() {
        let (mut state, mut rng) = game(quiet_config(), 4);
        state.enemy_timer.interval_ms = 1.0e9;
        let left = HeldDirections::with(&[Direction::Left]);
        let mut game_overs = 0;
        for _ in 0..100 {
            state.tick(&left, 16.0, &mut rng);
            game_overs += count_game_overs(&mut state);
            assert!(state.player.x >= 0.0);
        }
        assert_eq!(game_overs, 1);
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn test_letter_award_and_replacement() {
        let (mut state, mut rng) = game(quiet_config(), 5);
        state.enemy_timer.interval_ms = 1.0e9;
        // Player in the air at letter height, letter just in front
        state.player.y = 250.0;
        let mut letter = Letter::new(&state.config, 'K');
        letter.x = 255.0;
        state.letter = Some(letter);

        state.tick(&HeldDirections::new(), 16.0, &mut rng);
        assert_eq!(state.score, 50);
        assert!(state.letter.is_none(), "collected letter is removed");
        let collected: Vec<_> = state
            .events
            .drain()
            .filter(|e| matches!(e, GameEvent::LetterCollected { .. }))
            .collect();
        assert_eq!(collected, vec![GameEvent::LetterCollected { glyph: 'K', score: 50 }]);

        state.tick(&HeldDirections::new(), 16.0, &mut rng);
        let replacement = state.letter.as_ref().expect("replacement appears next frame");
        assert_eq!(replacement.x, 1295.0);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_escaped_letter_is_replaced() {
        let (mut state, mut rng) = game(quiet_config(), 6);
        state.enemy_timer.interval_ms = 1.0e9;
        let mut letter = Letter::new(&state.config, 'Z');
        letter.x = -52.0;
        state.letter = Some(letter);
        state.tick(&HeldDirections::new(), 16.0, &mut rng);
        assert!(state.letter.is_none());
        assert_eq!(state.score, 0);
        state.tick(&HeldDirections::new(), 16.0, &mut rng);
        assert!(state.letter.is_some());
    }

    #[test]
    fn test_enemies_spawn_and_get_pruned() {
        let (mut state, mut rng) = game(quiet_config(), 7);
        // Keep the player out of reach so the run never ends
        state.player.y = -10_000.0;
        let mut spawned = 0;
        for _ in 0..3000 {
            state.player.vy = -1.0;
            state.tick(&HeldDirections::new(), 16.0, &mut rng);
            spawned += state
                .events
                .drain()
                .filter(|e| *e == GameEvent::EnemySpawned(EnemyKind::Ground))
                .count();
            assert!(state.enemies.iter().all(|e| e.x >= -e.width));
        }
        assert!(!state.game_over);
        assert!(spawned > 10);
        // Each enemy lives 183 frames and waves come every ~100+ frames
        assert!(state.enemies.len() <= 2);
    }

    #[test]
    fn test_flyers_spawn_when_enabled() {
        let (mut state, mut rng) = game(GameConfig::default(), 8);
        state.player.y = -10_000.0;
        let mut flying = 0;
        for _ in 0..2000 {
            state.player.vy = -1.0;
            state.tick(&HeldDirections::new(), 16.0, &mut rng);
            flying += state
                .events
                .drain()
                .filter(|e| *e == GameEvent::EnemySpawned(EnemyKind::Flying))
                .count();
        }
        assert!(flying > 0);
    }

    #[test]
    fn test_flyers_absent_when_disabled() {
        let (mut state, mut rng) = game(quiet_config(), 9);
        state.player.y = -10_000.0;
        for _ in 0..2000 {
            state.player.vy = -1.0;
            state.tick(&HeldDirections::new(), 16.0, &mut rng);
            assert!(state.flyers.is_empty());
        }
    }

    #[test]
    fn test_flyer_contact_ends_run() {
        let (mut state, mut rng) = game(GameConfig::default(), 12);
        let mut flyer = SecondaryEnemy::spawn_at_edge(&state.config, &mut rng);
        flyer.x = 150.0;
        flyer.y = 560.0;
        flyer.speed = 0.0;
        flyer.curve = 0.0;
        state.flyers = vec![flyer];

        assert!(state.tick(&HeldDirections::new(), 16.0, &mut rng));
        assert!(state.game_over);
        let events: Vec<_> = state.events.drain().collect();
        assert!(events.contains(&GameEvent::Collision(Hazard::FlyingEnemy)));
        assert_eq!(count_game_overs_in(&events), 1);
    }

    #[test]
    fn test_flyer_pruned_past_left_edge() {
        let (mut state, mut rng) = game(GameConfig::default(), 13);
        state.flyer_timer.interval_ms = 1.0e9;
        state.player.y = -10_000.0;
        let mut flyer = SecondaryEnemy::spawn_at_edge(&state.config, &mut rng);
        flyer.x = -flyer.width + 1.0;
        flyer.speed = 2.0;
        state.flyers = vec![flyer];

        state.player.vy = -1.0;
        state.tick(&HeldDirections::new(), 16.0, &mut rng);
        assert!(state.flyers.is_empty());
        assert!(!state.game_over);
    }

    #[test]
    fn test_opening_wave_never_ends_first_tick() {
        for seed in 0..300 {
            let (mut state, mut rng) = game(GameConfig::default(), seed);
            assert!(!state.tick(&HeldDirections::new(), 16.0, &mut rng), "seed {}", seed);
            for _ in 0..5 {
                state.restart(&mut rng);
                assert!(!state.tick(&HeldDirections::new(), 16.0, &mut rng), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_player_stays_in_bounds_under_random_input() {
        let (mut state, mut rng) = game(GameConfig::default(), 10);
        let mut input_rng = SmallRng::seed_from_u64(99);
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for _ in 0..5000 {
            let held: Vec<Direction> = all.iter().copied().filter(|_| input_rng.gen_bool(0.3)).collect();
            state.tick(&HeldDirections::with(&held), 16.0, &mut rng);
            let p = &state.player;
            assert!(p.x >= 0.0 && p.x <= p.max_x());
            assert!(p.y <= p.ground_line());
            if state.game_over {
                state.restart(&mut rng);
            }
        }
    }

    #[test]
    fn test_restart_resets_and_is_idempotent() {
        let (mut state, mut rng) = game(GameConfig::default(), 11);
        let right = HeldDirections::with(&[Direction::Right, Direction::Up]);
        for _ in 0..300 {
            state.tick(&right, 16.0, &mut rng);
        }
        state.score = 400;
        state.game_over = true;

        state.restart(&mut SmallRng::seed_from_u64(50));
        let player = state.player.clone();
        let background = state.background.clone();
        let flyers = state.flyers.clone();
        let enemy_timer = state.enemy_timer.clone();

        state.restart(&mut SmallRng::seed_from_u64(50));
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.frame, 0);
        assert!(state.enemies.is_empty());
        assert!(state.letter.is_none());
        assert_eq!(state.player, Player::new(&state.config));
        assert_eq!(state.background.x, 0.0);
        assert_eq!(state.enemy_timer.timer_ms, 0.0);
        assert_eq!(state.player, player);
        assert_eq!(state.background, background);
        assert_eq!(state.flyers, flyers);
        assert_eq!(state.enemy_timer, enemy_timer);
        assert_eq!(state.events.drain().collect::<Vec<_>>(), vec![GameEvent::Restarted]);
    }
}
