//! Game state and entity types
//!
//! One session's worth of mutable state lives in [`GameState`]; there are no
//! module-level globals. Coin placement is the only source of randomness and
//! draws from a seeded PCG stream owned by the state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title overlay, waiting for confirm input (optional, see config)
    Start,
    /// Active gameplay
    Playing,
    /// Win score reached
    Won,
    /// Ran into the enemy
    Lost,
}

/// The player-controlled square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, PLAYER_SIZE)
    }
}

/// The bouncing enemy square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, ENEMY_SIZE)
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
}

impl Coin {
    pub fn aabb(&self) -> Aabb {
        Aabb::square(self.pos, COIN_SIZE)
    }
}

/// Complete per-session game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, for reproducing coin placement
    pub seed: u64,
    /// Canvas dimensions, read from the surface at startup
    pub bounds: Vec2,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    pub enemy: Enemy,
    pub coin: Coin,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session over a `bounds`-sized canvas
    pub fn new(seed: u64, bounds: Vec2, config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let coin = spawn_coin(&mut rng, bounds);
        Self {
            seed,
            bounds,
            phase: initial_phase(&config),
            config,
            score: 0,
            player: Player { pos: PLAYER_START },
            enemy: Enemy {
                pos: ENEMY_START,
                vel: ENEMY_START_VEL,
            },
            coin,
            rng,
        }
    }

    /// Leave the start screen (no-op in any other phase)
    pub fn confirm(&mut self) {
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Playing;
        }
    }

    /// Reset the session: entities, score, and phase. Valid in any phase.
    /// The RNG stream continues, so the new coin lands somewhere fresh.
    pub fn restart(&mut self) {
        self.score = 0;
        self.phase = initial_phase(&self.config);
        self.player.pos = PLAYER_START;
        self.enemy.pos = ENEMY_START;
        self.enemy.vel = ENEMY_START_VEL;
        self.respawn_coin();
    }

    /// Replace the coin with a freshly sampled one
    pub fn respawn_coin(&mut self) {
        self.coin = spawn_coin(&mut self.rng, self.bounds);
    }
}

fn initial_phase(config: &GameConfig) -> GamePhase {
    if config.start_screen {
        GamePhase::Start
    } else {
        GamePhase::Playing
    }
}

/// Sample a coin position: uniform integer coordinates, at least
/// `COIN_MARGIN` from every canvas edge. No rejection against other
/// entities; a coin may legitimately land under the player or enemy.
fn spawn_coin(rng: &mut Pcg32, bounds: Vec2) -> Coin {
    let min = COIN_MARGIN as i32;
    let max_x = ((bounds.x - COIN_MARGIN - COIN_SIZE) as i32).max(min);
    let max_y = ((bounds.y - COIN_MARGIN - COIN_SIZE) as i32).max(min);
    Coin {
        pos: Vec2::new(
            rng.random_range(min..=max_x) as f32,
            rng.random_range(min..=max_y) as f32,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(480.0, 360.0);

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7, BOUNDS, GameConfig::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(220.0, 180.0));
        assert_eq!(state.enemy.pos, Vec2::new(60.0, 60.0));
        assert_eq!(state.enemy.vel, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_start_screen_variant_begins_in_start() {
        let config = GameConfig {
            start_screen: true,
            ..Default::default()
        };
        let mut state = GameState::new(7, BOUNDS, config);
        assert_eq!(state.phase, GamePhase::Start);

        state.confirm();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_confirm_is_noop_outside_start() {
        let mut state = GameState::new(7, BOUNDS, GameConfig::default());
        state.phase = GamePhase::Lost;
        state.confirm();
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_coin_spawns_inside_margin() {
        let mut state = GameState::new(99, BOUNDS, GameConfig::default());
        for _ in 0..200 {
            state.respawn_coin();
            let p = state.coin.pos;
            assert!(p.x >= COIN_MARGIN && p.x <= BOUNDS.x - COIN_MARGIN - COIN_SIZE);
            assert!(p.y >= COIN_MARGIN && p.y <= BOUNDS.y - COIN_MARGIN - COIN_SIZE);
            assert_eq!(p.x, p.x.trunc());
            assert_eq!(p.y, p.y.trunc());
        }
    }

    #[test]
    fn test_coin_spawn_survives_tiny_canvas() {
        // Degenerate surface: the margin range collapses instead of panicking
        let state = GameState::new(1, Vec2::new(30.0, 30.0), GameConfig::default());
        assert_eq!(state.coin.pos, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_restart_resets_everything() {
        for phase in [
            GamePhase::Start,
            GamePhase::Playing,
            GamePhase::Won,
            GamePhase::Lost,
        ] {
            let mut state = GameState::new(5, BOUNDS, GameConfig::default());
            state.phase = phase;
            state.score = 4;
            state.player.pos = Vec2::new(1.0, 2.0);
            state.enemy.pos = Vec2::new(300.0, 300.0);
            state.enemy.vel = Vec2::new(-4.2, 3.6);

            state.restart();
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.score, 0);
            assert_eq!(state.player.pos, Vec2::new(220.0, 180.0));
            assert_eq!(state.enemy.pos, Vec2::new(60.0, 60.0));
            assert_eq!(state.enemy.vel, Vec2::new(3.0, 2.0));
        }
    }

    #[test]
    fn test_restart_with_start_screen_returns_to_start() {
        let config = GameConfig {
            start_screen: true,
            ..Default::default()
        };
        let mut state = GameState::new(5, BOUNDS, config);
        state.confirm();
        state.phase = GamePhase::Won;

        state.restart();
        assert_eq!(state.phase, GamePhase::Start);
    }
}
