//! Character domain: the action state machine.
//!
//! One action is current at any instant. Timed transitions are data: the
//! state holds at most one pending deadline for the jump chain and one for
//! action recovery, each replaced atomically when a new trigger fires, so two
//! triggers can never race each other's callbacks.

use bevy::prelude::*;

use super::catalog::Action;
use super::input::{ControlKey, InputState};

/// Which way the sprite faces. Updated by horizontal displacement only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Phase of the fixed-duration jump arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Start,
    Loop,
    Falling,
}

/// Deadline-driven transitions. At most one of each kind is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
enum JumpTransition {
    EnterLoop,
    EnterFalling,
    Land,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RecoveryTransition {
    /// Attack or slide finished: clear the attack gate and settle.
    Settle,
    /// Idle blink finished: return to idle if nothing else started.
    RevertBlink,
}

// Phase durations in seconds.
const SLASH_RECOVERY: f32 = 0.6;
const KICK_RECOVERY: f32 = 0.6;
const THROW_RECOVERY: f32 = 0.7;
const SLIDE_DURATION: f32 = 0.4;
const JUMP_START_DURATION: f32 = 0.3;
const JUMP_TOTAL_DURATION: f32 = 0.8;
const FALL_DURATION: f32 = 0.2;
pub const BLINK_DURATION: f32 = 1.0;
pub const BLINK_CHECK_INTERVAL: f32 = 3.0;
pub const BLINK_CHANCE: f64 = 0.3;

/// Slack for deadline comparisons. Accumulated f32 subtraction can leave a
/// few ULPs of a deadline standing after its nominal duration has elapsed,
/// which would push the transition a whole tick late.
const DEADLINE_EPSILON: f32 = 1e-6;

/// Live character state, owned by the state machine and read by rendering.
#[derive(Component, Debug, Default)]
pub struct CharacterState {
    pub action: Action,
    pub facing: Facing,
    pub is_jumping: bool,
    pub is_attacking: bool,
    pub is_moving: bool,
    jump_phase: JumpPhase,
    pending_jump: Option<(f32, JumpTransition)>,
    pending_recovery: Option<(f32, RecoveryTransition)>,
}

impl CharacterState {
    pub fn jump_phase(&self) -> JumpPhase {
        self.jump_phase
    }

    /// Slash trigger. Ignored while another attack is recovering. The variant
    /// is picked from the live jump/run state at trigger time.
    pub fn trigger_slash(&mut self, running: bool) {
        if self.is_attacking {
            return;
        }
        self.is_attacking = true;
        self.action = if self.is_jumping {
            Action::AirSlashing
        } else if running && self.is_moving {
            Action::RunSlashing
        } else {
            Action::Slashing
        };
        self.pending_recovery = Some((SLASH_RECOVERY, RecoveryTransition::Settle));
    }

    /// Kick trigger. Kicks have no air or run variant.
    pub fn trigger_kick(&mut self) {
        if self.is_attacking {
            return;
        }
        self.is_attacking = true;
        self.action = Action::Kicking;
        self.pending_recovery = Some((KICK_RECOVERY, RecoveryTransition::Settle));
    }

    /// Throw trigger, with the same variant selection as slash.
    pub fn trigger_throw(&mut self, running: bool) {
        if self.is_attacking {
            return;
        }
        self.is_attacking = true;
        self.action = if self.is_jumping {
            Action::AirThrowing
        } else if running && self.is_moving {
            Action::RunThrowing
        } else {
            Action::Throwing
        };
        self.pending_recovery = Some((THROW_RECOVERY, RecoveryTransition::Settle));
    }

    /// Slide trigger: only while a movement key is held, on the ground, and
    /// outside an attack. A second trigger mid-slide is ignored.
    pub fn trigger_slide(&mut self, movement_held: bool) {
        if !movement_held || self.is_jumping || self.is_attacking || self.action == Action::Sliding
        {
            return;
        }
        self.action = Action::Sliding;
        self.pending_recovery = Some((SLIDE_DURATION, RecoveryTransition::Settle));
    }

    /// Jump trigger. Ignored while already airborne. The whole arc is fixed:
    /// start for 300 ms, loop until 800 ms, falling for 200 ms, then settle.
    pub fn trigger_jump(&mut self) {
        if self.is_jumping {
            return;
        }
        self.is_jumping = true;
        self.jump_phase = JumpPhase::Start;
        if !self.is_attacking {
            self.action = Action::JumpStart;
        }
        self.pending_jump = Some((JUMP_START_DURATION, JumpTransition::EnterLoop));
    }

    /// Advance both pending deadlines by `dt` and apply any that expired.
    /// Settling re-reads the live movement/shift state passed in.
    pub fn tick(&mut self, dt: f32, movement_held: bool, running: bool) {
        if let Some((remaining, transition)) = self.pending_jump {
            let remaining = remaining - dt;
            if remaining <= DEADLINE_EPSILON {
                self.pending_jump = None;
                self.apply_jump_transition(transition, movement_held, running);
            } else {
                self.pending_jump = Some((remaining, transition));
            }
        }
        if let Some((remaining, transition)) = self.pending_recovery {
            let remaining = remaining - dt;
            if remaining <= DEADLINE_EPSILON {
                self.pending_recovery = None;
                self.apply_recovery(transition, movement_held, running);
            } else {
                self.pending_recovery = Some((remaining, transition));
            }
        }
    }

    fn apply_jump_transition(
        &mut self,
        transition: JumpTransition,
        movement_held: bool,
        running: bool,
    ) {
        match transition {
            JumpTransition::EnterLoop => {
                self.jump_phase = JumpPhase::Loop;
                if !self.is_attacking {
                    self.action = Action::JumpLoop;
                }
                self.pending_jump = Some((
                    JUMP_TOTAL_DURATION - JUMP_START_DURATION,
                    JumpTransition::EnterFalling,
                ));
            }
            JumpTransition::EnterFalling => {
                self.is_jumping = false;
                self.jump_phase = JumpPhase::Falling;
                if !self.is_attacking {
                    self.action = Action::Falling;
                }
                self.pending_jump = Some((FALL_DURATION, JumpTransition::Land));
            }
            JumpTransition::Land => {
                self.jump_phase = JumpPhase::Grounded;
                if !self.is_attacking {
                    self.settle(movement_held, running);
                }
            }
        }
    }

    fn apply_recovery(&mut self, transition: RecoveryTransition, movement_held: bool, running: bool) {
        match transition {
            RecoveryTransition::Settle => {
                self.is_attacking = false;
                self.settle(movement_held, running);
            }
            RecoveryTransition::RevertBlink => {
                // Live re-read: only revert if nothing else started meanwhile.
                if self.action == Action::IdleBlinking
                    && !self.is_moving
                    && !self.is_attacking
                    && !self.is_jumping
                {
                    self.action = Action::Idle;
                }
            }
        }
    }

    /// Re-derive the current action from movement and jump state. Called when
    /// a timed special action ends and every tick the integrator moves.
    pub fn settle(&mut self, movement_held: bool, running: bool) {
        self.action = match self.jump_phase {
            JumpPhase::Start => Action::JumpStart,
            JumpPhase::Loop => Action::JumpLoop,
            JumpPhase::Falling => Action::Falling,
            JumpPhase::Grounded => {
                if movement_held {
                    if running {
                        Action::Running
                    } else {
                        Action::Walking
                    }
                } else {
                    Action::Idle
                }
            }
        };
    }

    /// Whether the movement integrator may overwrite the action this tick.
    pub fn movement_may_derive_action(&self) -> bool {
        !self.is_attacking
            && !self.is_jumping
            && self.jump_phase == JumpPhase::Grounded
            && self.action != Action::Sliding
    }

    /// Begin an idle blink. Caller decides the random gate.
    pub fn start_blink(&mut self) {
        if self.action != Action::Idle {
            return;
        }
        self.action = Action::IdleBlinking;
        self.pending_recovery = Some((BLINK_DURATION, RecoveryTransition::RevertBlink));
    }
}

/// Dispatch this frame's press edges into state machine triggers, then tick
/// the pending deadlines.
pub(crate) fn drive_state_machine(
    time: Res<Time>,
    input: Res<InputState>,
    mut query: Query<&mut CharacterState>,
) {
    let movement_held = input.any_direction_held();
    let running = input.is_held(ControlKey::Shift);

    for mut state in &mut query {
        if input.just_pressed(ControlKey::Attack) {
            state.trigger_slash(running);
        }
        if input.just_pressed(ControlKey::Kick) {
            state.trigger_kick();
        }
        if input.just_pressed(ControlKey::Throw) {
            state.trigger_throw(running);
        }
        if input.just_pressed(ControlKey::Slide) {
            state.trigger_slide(movement_held);
        }
        if input.just_pressed(ControlKey::Jump) {
            state.trigger_jump();
        }

        state.tick(time.delta_secs(), movement_held, running);

        // Releasing the last movement key settles immediately rather than
        // waiting for the integrator's next moved tick. A blink in flight is
        // left alone here; its own revert deadline ends it, and movement
        // still interrupts it through the integrator.
        if !movement_held
            && state.action != Action::IdleBlinking
            && state.movement_may_derive_action()
        {
            state.is_moving = false;
            state.settle(false, running);
        }
    }
}
