//! Character domain: tick-driven frame cycling.
//!
//! No wall-clock interpolation: one `Update` invocation is one tick, and the
//! frame index is pure modular arithmetic over the action's sequence.

use bevy::prelude::*;

use super::catalog::Action;
use super::state_machine::CharacterState;

/// Per-entity animation playback state.
#[derive(Component, Debug, Default)]
pub struct AnimationClock {
    action: Action,
    counter: u32,
    frame: u32,
}

impl AnimationClock {
    pub fn action(&self) -> Action {
        self.action
    }

    /// Displayed frame index, always in `[0, frames(action))`.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Switch to a new action, restarting playback. A no-op when the action
    /// is unchanged so a looping animation is never visibly reset.
    pub fn set_action(&mut self, action: Action) {
        if self.action != action {
            self.action = action;
            self.counter = 0;
            self.frame = 0;
        }
    }

    /// One animation tick: advance the counter, and every `frame_delay` ticks
    /// step to the next frame, wrapping at the sequence length.
    pub fn tick(&mut self) {
        let seq = self.action.sequence();
        self.counter = self.counter.wrapping_add(1);
        if self.counter % seq.frame_delay == 0 {
            self.frame = (self.frame + 1) % seq.frames;
        }
    }
}

/// Follow the state machine's current action and advance playback.
pub(crate) fn advance_animation(mut query: Query<(&CharacterState, &mut AnimationClock)>) {
    for (state, mut clock) in &mut query {
        clock.set_action(state.action);
        clock.tick();
    }
}
