//! Character domain: tests for the catalog, input tracker, state machine,
//! animation clock, movement integrator, and preloader.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;

use super::animation::AnimationClock;
use super::catalog::{Action, frame_path};
use super::input::{ControlKey, InputState};
use super::movement::{ArenaBounds, CharacterTuning, integrate};
use super::preload::SpriteLibrary;
use super::state_machine::{CharacterState, Facing, JumpPhase};

// --- catalog ---

#[test]
fn test_catalog_covers_every_action_with_sane_sequences() {
    assert_eq!(Action::ALL.len(), 17);
    for action in Action::ALL {
        let seq = action.sequence();
        assert!(seq.frames > 0, "{:?} has no frames", action);
        assert!(seq.frame_delay > 0, "{:?} has zero delay", action);
    }
    let total: u32 = Action::ALL.iter().map(|a| a.sequence().frames).sum();
    assert_eq!(total, 207);
}

#[test]
fn test_frame_path_zero_pads_and_repeats_the_folder() {
    assert_eq!(
        frame_path(Action::JumpStart, 3),
        "png/png_sequences/jump_start/0_skeleton_crusader_jump_start_003.png"
    );
    assert_eq!(
        frame_path(Action::Idle, 0),
        "png/png_sequences/idle/0_skeleton_crusader_idle_000.png"
    );
    // Three digits is a minimum, not a truncation.
    assert!(frame_path(Action::Dying, 123).ends_with("_123.png"));
}

// --- input tracker ---

#[test]
fn test_press_records_one_edge_per_physical_press() {
    let mut input = InputState::default();
    input.press(ControlKey::Attack);
    assert!(input.just_pressed(ControlKey::Attack));
    input.clear_edges();

    // OS key repeat delivers another press while still held: no new edge.
    input.press(ControlKey::Attack);
    assert!(!input.just_pressed(ControlKey::Attack));
    assert!(input.is_held(ControlKey::Attack));

    input.release(ControlKey::Attack);
    input.press(ControlKey::Attack);
    assert!(input.just_pressed(ControlKey::Attack));
}

#[test]
fn test_release_is_idempotent() {
    let mut input = InputState::default();
    input.release(ControlKey::Jump);
    input.press(ControlKey::Jump);
    input.release(ControlKey::Jump);
    input.release(ControlKey::Jump);
    assert!(!input.is_held(ControlKey::Jump));
}

#[test]
fn test_axis_combines_held_directions() {
    let mut input = InputState::default();
    input.press(ControlKey::Right);
    input.press(ControlKey::Up);
    assert_eq!(input.axis(), Vec2::new(1.0, 1.0));

    input.press(ControlKey::Left);
    assert_eq!(input.axis().x, 0.0);
    assert!(input.any_direction_held());
}

#[test]
fn test_release_directions_spares_the_run_modifier() {
    let mut input = InputState::default();
    input.press(ControlKey::Left);
    input.press(ControlKey::Down);
    input.press(ControlKey::Shift);
    input.release_directions();
    assert!(!input.any_direction_held());
    assert!(input.is_held(ControlKey::Shift));
}

// --- state machine ---

#[test]
fn test_slash_variant_follows_live_state() {
    let mut state = CharacterState::default();
    state.trigger_slash(false);
    assert_eq!(state.action, Action::Slashing);

    let mut state = CharacterState::default();
    state.is_moving = true;
    state.trigger_slash(true);
    assert_eq!(state.action, Action::RunSlashing);

    let mut state = CharacterState::default();
    state.trigger_jump();
    state.trigger_slash(true);
    assert_eq!(state.action, Action::AirSlashing);
}

#[test]
fn test_throw_variant_follows_live_state() {
    let mut state = CharacterState::default();
    state.trigger_jump();
    state.trigger_throw(false);
    assert_eq!(state.action, Action::AirThrowing);

    let mut state = CharacterState::default();
    state.is_moving = true;
    state.trigger_throw(true);
    assert_eq!(state.action, Action::RunThrowing);
}

#[test]
fn test_second_attack_during_recovery_is_ignored() {
    let mut state = CharacterState::default();
    state.trigger_slash(false);
    state.trigger_kick();
    state.trigger_throw(false);
    assert_eq!(state.action, Action::Slashing);

    // Once recovery elapses, the next trigger lands.
    state.tick(0.6, false, false);
    assert!(!state.is_attacking);
    state.trigger_kick();
    assert_eq!(state.action, Action::Kicking);
}

#[test]
fn test_attack_recovers_on_schedule() {
    let mut state = CharacterState::default();
    state.trigger_kick();
    state.tick(0.59, false, false);
    assert_eq!(state.action, Action::Kicking);
    assert!(state.is_attacking);

    state.tick(0.02, false, false);
    assert!(!state.is_attacking);
    assert_eq!(state.action, Action::Idle);
}

#[test]
fn test_recovery_settles_into_held_movement() {
    let mut state = CharacterState::default();
    state.trigger_throw(false);
    assert_eq!(state.action, Action::Throwing);
    state.tick(0.7, true, true);
    assert_eq!(state.action, Action::Running);
}

#[test]
fn test_slide_requires_grounded_movement() {
    let mut state = CharacterState::default();
    state.trigger_slide(false);
    assert_ne!(state.action, Action::Sliding);

    state.trigger_jump();
    state.trigger_slide(true);
    assert_ne!(state.action, Action::Sliding);

    let mut state = CharacterState::default();
    state.is_moving = true;
    state.trigger_slide(true);
    assert_eq!(state.action, Action::Sliding);
    // Re-trigger mid-slide does not restart the slide.
    state.tick(0.3, true, false);
    state.trigger_slide(true);
    state.tick(0.11, true, false);
    assert_eq!(state.action, Action::Walking);
}

#[test]
fn test_jump_timeline_phases() {
    let mut state = CharacterState::default();
    state.trigger_jump();
    assert_eq!(state.action, Action::JumpStart);
    assert_eq!(state.jump_phase(), JumpPhase::Start);
    assert!(state.is_jumping);

    state.tick(0.3, false, false);
    assert_eq!(state.action, Action::JumpLoop);
    assert_eq!(state.jump_phase(), JumpPhase::Loop);

    state.tick(0.5, false, false);
    assert_eq!(state.action, Action::Falling);
    assert_eq!(state.jump_phase(), JumpPhase::Falling);
    assert!(!state.is_jumping);

    state.tick(0.2, false, false);
    assert_eq!(state.jump_phase(), JumpPhase::Grounded);
    assert_eq!(state.action, Action::Idle);
}

#[test]
fn test_jump_cannot_be_retriggered_airborne() {
    let mut state = CharacterState::default();
    state.trigger_jump();
    state.tick(0.3, false, false);
    state.trigger_jump();
    // A second trigger would have rewound the arc to its start phase.
    assert_eq!(state.jump_phase(), JumpPhase::Loop);
}

#[test]
fn test_air_attack_outlasts_the_jump_visual() {
    let mut state = CharacterState::default();
    state.trigger_jump();
    state.tick(0.3, false, false);
    state.trigger_slash(false);
    assert_eq!(state.action, Action::AirSlashing);

    // The jump chain advances underneath, but the attack keeps the screen.
    state.tick(0.5, false, false);
    assert_eq!(state.jump_phase(), JumpPhase::Falling);
    assert_eq!(state.action, Action::AirSlashing);

    // Attack recovery lands mid-fall and settles into the falling visual.
    state.tick(0.1, false, false);
    assert_eq!(state.action, Action::Falling);

    state.tick(0.1, false, false);
    assert_eq!(state.jump_phase(), JumpPhase::Grounded);
    assert_eq!(state.action, Action::Idle);
}

#[test]
fn test_blink_reverts_only_if_still_blinking() {
    let mut state = CharacterState::default();
    state.start_blink();
    assert_eq!(state.action, Action::IdleBlinking);
    state.tick(1.0, false, false);
    assert_eq!(state.action, Action::Idle);

    // Movement interrupts the blink; the stale revert must not fire.
    let mut state = CharacterState::default();
    state.start_blink();
    state.is_moving = true;
    state.settle(true, false);
    assert_eq!(state.action, Action::Walking);
    state.tick(1.0, true, false);
    assert_eq!(state.action, Action::Walking);
}

#[test]
fn test_blink_survives_idle_frames() {
    // Drive the real system: a blink must keep playing across frames where
    // nothing is held, not get settled back to idle.
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<InputState>();
    app.add_systems(Update, super::state_machine::drive_state_machine);

    let mut state = CharacterState::default();
    state.start_blink();
    let entity = app.world_mut().spawn(state).id();

    app.update();
    app.update();

    let state = app
        .world()
        .entity(entity)
        .get::<CharacterState>()
        .expect("character state");
    assert_eq!(state.action, Action::IdleBlinking);
}

#[test]
fn test_recovery_fires_at_an_exact_tick_boundary() {
    // Splitting a 0.6 s recovery into 0.5 + 0.1 leaves a few ULPs of f32
    // residue; the deadline must still fire on the second tick.
    let mut state = CharacterState::default();
    state.trigger_kick();
    state.tick(0.5, false, false);
    assert!(state.is_attacking);
    state.tick(0.1, false, false);
    assert!(!state.is_attacking);
    assert_eq!(state.action, Action::Idle);
}

#[test]
fn test_blink_only_starts_from_idle() {
    let mut state = CharacterState::default();
    state.trigger_kick();
    state.start_blink();
    assert_eq!(state.action, Action::Kicking);
}

#[test]
fn test_movement_cannot_override_the_falling_visual() {
    let mut state = CharacterState::default();
    state.trigger_jump();
    state.tick(0.3, false, false);
    state.tick(0.5, false, false);
    assert_eq!(state.jump_phase(), JumpPhase::Falling);
    // is_jumping is already false here, but the fall still owns the action.
    assert!(!state.movement_may_derive_action());
}

// --- movement integrator ---

#[test]
fn test_displacement_is_framerate_normalized() {
    let tuning = CharacterTuning::default();
    let bounds = ArenaBounds::default();
    let mut pos = Vec2::new(200.0, 200.0);

    // 2 px/tick at 60 fps over half a second is 60 px.
    let (moved, facing) = integrate(Vec2::X, false, 0.5, &tuning, bounds, &mut pos);
    assert!(moved);
    assert_eq!(facing, Some(Facing::Right));
    assert_eq!(pos, Vec2::new(260.0, 200.0));

    // Running multiplies the same step by 1.5.
    let mut pos = Vec2::new(200.0, 200.0);
    integrate(Vec2::X, true, 0.5, &tuning, bounds, &mut pos);
    assert_eq!(pos.x, 290.0);
}

#[test]
fn test_zero_axis_moves_nothing() {
    let tuning = CharacterTuning::default();
    let mut pos = Vec2::new(200.0, 200.0);
    let (moved, facing) = integrate(
        Vec2::ZERO,
        true,
        0.5,
        &tuning,
        ArenaBounds::default(),
        &mut pos,
    );
    assert!(!moved);
    assert_eq!(facing, None);
    assert_eq!(pos, Vec2::new(200.0, 200.0));
}

#[test]
fn test_bounding_box_clamps_at_the_arena_edge() {
    let tuning = CharacterTuning::default();
    let bounds = ArenaBounds {
        width: 1280.0,
        height: 720.0,
    };

    let mut pos = Vec2::new(1275.0, 715.0);
    integrate(Vec2::new(1.0, 1.0), true, 1.0, &tuning, bounds, &mut pos);
    assert_eq!(pos, Vec2::new(1240.0, 680.0));

    let mut pos = Vec2::new(5.0, 5.0);
    integrate(Vec2::new(-1.0, -1.0), false, 1.0, &tuning, bounds, &mut pos);
    assert_eq!(pos, Vec2::new(40.0, 40.0));
}

#[test]
fn test_arena_smaller_than_the_character_pins_to_the_near_corner() {
    let tuning = CharacterTuning::default();
    let bounds = ArenaBounds {
        width: 60.0,
        height: 60.0,
    };
    let mut pos = Vec2::new(30.0, 30.0);
    integrate(Vec2::X, false, 1.0, &tuning, bounds, &mut pos);
    assert_eq!(pos, Vec2::new(40.0, 40.0));
}

#[test]
fn test_left_movement_flips_facing() {
    let tuning = CharacterTuning::default();
    let mut pos = Vec2::new(200.0, 200.0);
    let (_, facing) = integrate(
        Vec2::new(-1.0, 0.0),
        false,
        0.016,
        &tuning,
        ArenaBounds::default(),
        &mut pos,
    );
    assert_eq!(facing, Some(Facing::Left));

    // Pure vertical movement keeps the current facing.
    let (_, facing) = integrate(
        Vec2::Y,
        false,
        0.016,
        &tuning,
        ArenaBounds::default(),
        &mut pos,
    );
    assert_eq!(facing, None);
}

#[test]
fn test_walk_then_shift_midway_switches_to_running() {
    let tuning = CharacterTuning::default();
    let bounds = ArenaBounds::default();
    let mut state = CharacterState::default();
    let mut pos = Vec2::new(200.0, 200.0);

    // Half a second of plain walking: 2 px/tick x 60 x 0.5 = 60 px.
    let (moved, _) = integrate(Vec2::X, false, 0.5, &tuning, bounds, &mut pos);
    state.is_moving = moved;
    if moved && state.movement_may_derive_action() {
        state.settle(true, false);
    }
    assert_eq!(pos.x, 260.0);
    assert_eq!(state.action, Action::Walking);

    // Shift lands mid-press: the same held axis now runs at 1.5x.
    let (moved, _) = integrate(Vec2::X, true, 0.5, &tuning, bounds, &mut pos);
    state.is_moving = moved;
    if moved && state.movement_may_derive_action() {
        state.settle(true, true);
    }
    assert_eq!(pos.x, 350.0);
    assert_eq!(state.action, Action::Running);
}

// --- animation clock ---

#[test]
fn test_clock_advances_on_the_action_delay() {
    let mut clock = AnimationClock::default();
    clock.set_action(Action::Running); // 12 frames, delay 2
    assert_eq!(clock.frame(), 0);
    clock.tick();
    assert_eq!(clock.frame(), 0);
    clock.tick();
    assert_eq!(clock.frame(), 1);

    for _ in 0..22 {
        clock.tick();
    }
    assert_eq!(clock.frame(), 0);
}

#[test]
fn test_frame_stays_in_sequence_bounds() {
    let mut clock = AnimationClock::default();
    clock.set_action(Action::Sliding);
    let frames = Action::Sliding.sequence().frames;
    for _ in 0..1000 {
        clock.tick();
        assert!(clock.frame() < frames);
    }
}

#[test]
fn test_action_change_restarts_playback_but_repeat_does_not() {
    let mut clock = AnimationClock::default();
    clock.set_action(Action::Walking);
    for _ in 0..9 {
        clock.tick();
    }
    let mid = clock.frame();
    assert!(mid > 0);

    clock.set_action(Action::Walking);
    assert_eq!(clock.frame(), mid);

    clock.set_action(Action::Kicking);
    assert_eq!(clock.frame(), 0);
}

// --- preloader ---

fn asset_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<Image>();
    app
}

#[test]
fn test_preload_queues_every_frame_once() {
    let app = asset_test_app();
    let asset_server = app.world().resource::<AssetServer>().clone();

    let mut library = SpriteLibrary::default();
    assert!(!library.is_preloaded());
    library.preload(&asset_server);
    assert!(library.is_preloaded());

    for action in Action::ALL {
        let frames = action.sequence().frames;
        assert!(library.frame(action, frames - 1).is_some());
        assert!(library.frame(action, frames).is_none());
    }

    // A second preload keeps the existing handles.
    let before = library.frame(Action::Idle, 0).cloned();
    library.preload(&asset_server);
    assert_eq!(library.frame(Action::Idle, 0).cloned(), before);
}

#[test]
fn test_unloaded_frames_have_no_loaded_fallback() {
    let app = asset_test_app();
    let asset_server = app.world().resource::<AssetServer>().clone();
    let images = app.world().resource::<Assets<Image>>();

    let mut library = SpriteLibrary::default();
    library.preload(&asset_server);
    // Nothing has had a chance to load; the fallback must be honest about it.
    assert!(library.first_loaded(Action::Idle, images).is_none());
}
