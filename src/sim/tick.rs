//! Per-frame update step
//!
//! Advances the game state by exactly one tick. Motion is expressed in units
//! per tick; the frame scheduler is assumed to fire once per display refresh.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use crate::clamp_to_bounds;
use crate::consts::*;

/// Input observed for a single tick
///
/// `dir` comes from the currently-held movement keys, one unit per axis in
/// {-1, 0, 1}. Diagonals are deliberately not normalized. `confirm` and
/// `restart` are one-shot flags set by key-down events; the caller clears
/// them after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub dir: Vec2,
    pub confirm: bool,
    pub restart: bool,
}

/// Advance the game by one tick
///
/// Restart is honored in every phase and takes effect immediately: the
/// restarted state is what this frame renders. Physics and scoring only run
/// in [`GamePhase::Playing`].
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    if input.confirm && state.phase == GamePhase::Start {
        state.confirm();
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    // Player movement, clamped to the canvas
    let moved = state.player.pos + input.dir * PLAYER_SPEED;
    state.player.pos = clamp_to_bounds(moved, PLAYER_SIZE, state.bounds);

    // Enemy movement with boundary reflection. The position may overshoot
    // slightly before the flipped velocity pulls it back next tick.
    let enemy = &mut state.enemy;
    enemy.pos += enemy.vel;
    if enemy.pos.x <= 0.0 || enemy.pos.x + ENEMY_SIZE >= state.bounds.x {
        enemy.vel.x = -enemy.vel.x;
    }
    if enemy.pos.y <= 0.0 || enemy.pos.y + ENEMY_SIZE >= state.bounds.y {
        enemy.vel.y = -enemy.vel.y;
    }

    // Lose check strictly precedes the coin check: a tick that touches the
    // enemy scores nothing, even if the coin overlaps too.
    if state.player.aabb().overlaps(&state.enemy.aabb()) {
        state.phase = GamePhase::Lost;
        return;
    }

    if state.player.aabb().overlaps(&state.coin.aabb()) {
        state.score += 1;
        state.respawn_coin();

        // Each collected coin speeds the enemy up, preserving direction.
        // A zero component drifts negative, matching the original behavior.
        let enemy = &mut state.enemy;
        enemy.vel.x += if enemy.vel.x > 0.0 { ENEMY_SPEEDUP } else { -ENEMY_SPEEDUP };
        enemy.vel.y += if enemy.vel.y > 0.0 { ENEMY_SPEEDUP } else { -ENEMY_SPEEDUP };

        if state.score >= WIN_SCORE {
            state.phase = GamePhase::Won;
        }
    }
}
