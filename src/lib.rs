//! Coin Dash - a tiny canvas arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game phases)
//! - `input`: Key identifier parsing and the held-key set
//! - `config`: Data-driven session options
//! - `render`: Canvas 2D rendering (wasm only)
//! - `runloop`: requestAnimationFrame loop with cancellation (wasm only)

pub mod config;
pub mod input;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod runloop;

pub use config::GameConfig;

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    use glam::Vec2;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 26.0;
    /// Player movement per tick, per held axis
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Player start position
    pub const PLAYER_START: Vec2 = Vec2::new(220.0, 180.0);

    /// Enemy square edge length
    pub const ENEMY_SIZE: f32 = 28.0;
    /// Enemy start position
    pub const ENEMY_START: Vec2 = Vec2::new(60.0, 60.0);
    /// Enemy start velocity (units per tick)
    pub const ENEMY_START_VEL: Vec2 = Vec2::new(3.0, 2.0);
    /// Added to each enemy velocity component per coin, away from zero
    pub const ENEMY_SPEEDUP: f32 = 0.2;

    /// Coin square edge length
    pub const COIN_SIZE: f32 = 16.0;
    /// Coins spawn at least this far from the canvas edge
    pub const COIN_MARGIN: f32 = 20.0;

    /// Score needed to win
    pub const WIN_SCORE: u32 = 5;
}

/// Clamp a position so a square of `size` stays fully inside `bounds`
#[inline]
pub fn clamp_to_bounds(pos: Vec2, size: f32, bounds: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, (bounds.x - size).max(0.0)),
        pos.y.clamp(0.0, (bounds.y - size).max(0.0)),
    )
}
