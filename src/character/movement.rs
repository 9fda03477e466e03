//! Character domain: frame-rate-independent movement integration.
//!
//! Held directional keys become a per-tick displacement normalized to a
//! 60 fps baseline, and the character's bounding box is clamped inside the
//! arena. There is no collision with other entities.

use bevy::prelude::*;

use super::input::{ControlKey, InputState};
use super::state_machine::{CharacterState, Facing};

/// Movement and sizing knobs.
#[derive(Resource, Debug, Clone)]
pub struct CharacterTuning {
    /// Pixels per tick at the 60 fps baseline.
    pub base_speed: f32,
    /// Speed multiplier while shift is held.
    pub run_multiplier: f32,
    /// Side length of the character's square bounding box.
    pub size: f32,
    /// Spawn position, arena coordinates (origin bottom-left, +y up).
    pub spawn: Vec2,
}

impl Default for CharacterTuning {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            run_multiplier: 1.5,
            size: 80.0,
            spawn: Vec2::new(200.0, 200.0),
        }
    }
}

/// Arena extents the character is clamped to. Follows the window size.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Character center position in arena coordinates.
#[derive(Component, Debug)]
pub struct CharacterBody {
    pub position: Vec2,
}

/// Pure integration step: apply one tick of held-axis displacement and clamp
/// the center so the bounding box stays inside the bounds. Returns the facing
/// produced by horizontal input, if any, and whether anything moved.
pub fn integrate(
    axis: Vec2,
    running: bool,
    dt: f32,
    tuning: &CharacterTuning,
    bounds: ArenaBounds,
    position: &mut Vec2,
) -> (bool, Option<Facing>) {
    if axis == Vec2::ZERO {
        return (false, None);
    }

    let speed = if running {
        tuning.base_speed * tuning.run_multiplier
    } else {
        tuning.base_speed
    };
    // Normalize to the 60 fps baseline so real-world speed is frame-rate
    // independent.
    let step = speed * 60.0 * dt;

    position.x += axis.x * step;
    position.y += axis.y * step;

    let half = tuning.size / 2.0;
    position.x = position.x.clamp(half, (bounds.width - half).max(half));
    position.y = position.y.clamp(half, (bounds.height - half).max(half));

    let facing = if axis.x < 0.0 {
        Some(Facing::Left)
    } else if axis.x > 0.0 {
        Some(Facing::Right)
    } else {
        None
    };
    (true, facing)
}

/// Keep the arena bounds in sync with the primary window.
pub(crate) fn track_window_bounds(
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
    mut bounds: ResMut<ArenaBounds>,
) {
    if let Ok(window) = windows.single() {
        bounds.width = window.width();
        bounds.height = window.height();
    }
}

/// Apply held movement each tick. Displacement happens even mid-attack or
/// mid-jump; only the action derivation is gated.
pub(crate) fn apply_movement(
    time: Res<Time>,
    input: Res<InputState>,
    tuning: Res<CharacterTuning>,
    bounds: Res<ArenaBounds>,
    mut query: Query<(&mut CharacterBody, &mut CharacterState)>,
) {
    let axis = input.axis();
    let running = input.is_held(ControlKey::Shift);

    for (mut body, mut state) in &mut query {
        let (moved, facing) =
            integrate(axis, running, time.delta_secs(), &tuning, *bounds, &mut body.position);

        state.is_moving = moved;
        if let Some(facing) = facing {
            state.facing = facing;
        }
        if moved && state.movement_may_derive_action() {
            state.settle(true, running);
        }
    }
}
