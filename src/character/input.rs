//! Character domain: the logical input tracker.
//!
//! One owned set of held logical keys, mutated only through `press`/`release`.
//! The keyboard sampler and the touch overlay both feed this same resource, so
//! there is never a second "virtual" key set to reconcile.

use bevy::prelude::*;
use std::collections::HashSet;

/// Logical control keys, independent of the physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Left,
    Right,
    Up,
    Down,
    Shift,
    Attack,
    Kick,
    Throw,
    Jump,
    Slide,
}

impl ControlKey {
    pub const DIRECTIONS: [ControlKey; 4] = [
        ControlKey::Left,
        ControlKey::Right,
        ControlKey::Up,
        ControlKey::Down,
    ];
}

/// The live set of held logical keys plus this frame's press edges.
///
/// Pure state storage: no timers, no side effects. Consumers read it every
/// tick; the edge list is drained once per frame after the state machine ran.
#[derive(Resource, Debug, Default)]
pub struct InputState {
    held: HashSet<ControlKey>,
    just_pressed: Vec<ControlKey>,
}

impl InputState {
    /// Mark a key held. Pressing a key that is already held records no new
    /// edge, so OS key repeat cannot re-trigger gated actions.
    pub fn press(&mut self, key: ControlKey) {
        if self.held.insert(key) {
            self.just_pressed.push(key);
        }
    }

    /// Mark a key released. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, key: ControlKey) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: ControlKey) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: ControlKey) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn any_direction_held(&self) -> bool {
        ControlKey::DIRECTIONS.iter().any(|k| self.is_held(*k))
    }

    /// Held movement axes as a vector, +x right and +y up.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.is_held(ControlKey::Left) {
            axis.x -= 1.0;
        }
        if self.is_held(ControlKey::Right) {
            axis.x += 1.0;
        }
        if self.is_held(ControlKey::Down) {
            axis.y -= 1.0;
        }
        if self.is_held(ControlKey::Up) {
            axis.y += 1.0;
        }
        axis
    }

    /// Release every directional key. Used when the D-pad hides so a finger
    /// that never got its touch-end cannot leave the character walking.
    pub fn release_directions(&mut self) {
        for key in ControlKey::DIRECTIONS {
            self.held.remove(&key);
        }
    }

    /// Drop this frame's press edges. Runs once per frame, after consumers.
    pub fn clear_edges(&mut self) {
        self.just_pressed.clear();
    }
}

/// Physical bindings: any alias pressed counts as the logical key held.
const KEY_BINDINGS: [(&[KeyCode], ControlKey); 10] = [
    (&[KeyCode::KeyA, KeyCode::ArrowLeft], ControlKey::Left),
    (&[KeyCode::KeyD, KeyCode::ArrowRight], ControlKey::Right),
    (&[KeyCode::KeyW, KeyCode::ArrowUp], ControlKey::Up),
    (&[KeyCode::KeyS, KeyCode::ArrowDown], ControlKey::Down),
    (
        &[KeyCode::ShiftLeft, KeyCode::ShiftRight],
        ControlKey::Shift,
    ),
    (&[KeyCode::KeyX], ControlKey::Attack),
    (&[KeyCode::KeyC], ControlKey::Kick),
    (&[KeyCode::KeyV], ControlKey::Throw),
    (&[KeyCode::Space, KeyCode::KeyJ], ControlKey::Jump),
    (&[KeyCode::KeyZ], ControlKey::Slide),
];

/// Translate physical key edges into logical press/release calls.
///
/// A logical key is only released once no physical alias remains pressed, so
/// holding W and ArrowUp together and releasing one keeps `Up` held.
pub(crate) fn sample_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<InputState>,
) {
    for (codes, key) in KEY_BINDINGS {
        if codes.iter().any(|c| keyboard.just_pressed(*c)) {
            input.press(key);
        }
        if codes.iter().any(|c| keyboard.just_released(*c))
            && !codes.iter().any(|c| keyboard.pressed(*c))
        {
            input.release(key);
        }
    }
}

/// Drain press edges at the end of the frame.
pub(crate) fn clear_input_edges(mut input: ResMut<InputState>) {
    input.clear_edges();
}
