//! Character domain: the playable sprite.
//!
//! This module handles:
//! - The action catalog and sprite sequence table
//! - Best-effort sprite preloading
//! - The unified logical input tracker (keyboard + touch overlay)
//! - The action state machine with deadline-driven transitions
//! - Tick-based frame cycling and bounds-clamped movement

pub mod animation;
pub mod catalog;
pub mod input;
pub mod movement;
pub mod preload;
pub mod state_machine;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use rand::Rng;

pub use animation::AnimationClock;
pub use catalog::{Action, SpriteSequence, frame_path};
pub use input::{ControlKey, InputState};
pub use movement::{ArenaBounds, CharacterBody, CharacterTuning};
pub use preload::SpriteLibrary;
pub use state_machine::{CharacterState, Facing, JumpPhase};

use crate::core::{AppState, GameRng};
use state_machine::{BLINK_CHANCE, BLINK_CHECK_INTERVAL};

/// Marker for the playable character entity.
#[derive(Component, Debug)]
pub struct Player;

/// Update-phase ordering: input sampling feeds logic feeds rendering. The
/// touch overlay adds its press systems to `Input`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    Input,
    Logic,
    Render,
}

/// Vertical sprite offset while airborne, pixels.
const JUMP_LIFT: f32 = 30.0;

/// Tint used when no frame of the current action has loaded.
const PLACEHOLDER_COLOR: Color = Color::srgb(0.31, 0.8, 0.77);

/// Recurring idle-blink check.
#[derive(Resource, Debug)]
struct BlinkTimer(Timer);

impl Default for BlinkTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            BLINK_CHECK_INTERVAL,
            TimerMode::Repeating,
        ))
    }
}

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .init_resource::<SpriteLibrary>()
            .init_resource::<CharacterTuning>()
            .init_resource::<ArenaBounds>()
            .init_resource::<BlinkTimer>()
            .configure_sets(
                Update,
                (
                    CharacterSet::Input,
                    CharacterSet::Logic,
                    CharacterSet::Render,
                )
                    .chain(),
            )
            .add_systems(Startup, preload::preload_sprites)
            .add_systems(OnEnter(AppState::Playing), spawn_character)
            .add_systems(
                Update,
                wait_for_preload.run_if(in_state(AppState::Boot)),
            )
            .add_systems(
                Update,
                input::sample_keyboard
                    .in_set(CharacterSet::Input)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(
                Update,
                (
                    movement::track_window_bounds,
                    state_machine::drive_state_machine,
                    movement::apply_movement,
                    idle_blink,
                    input::clear_input_edges,
                )
                    .chain()
                    .in_set(CharacterSet::Logic)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(
                Update,
                (
                    animation::advance_animation,
                    sync_sprite_frame,
                    sync_transform,
                )
                    .chain()
                    .in_set(CharacterSet::Render)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Leave the boot screen once every queued sprite load has settled (loaded or
/// failed — a missing asset must never block the app).
fn wait_for_preload(
    library: Res<SpriteLibrary>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if library.all_settled(&asset_server) {
        let failed = library.failed_count(&asset_server);
        if failed > 0 {
            warn!("{} sprite frames failed to load; falling back per frame", failed);
        }
        next_state.set(AppState::Playing);
    }
}

fn spawn_character(mut commands: Commands, tuning: Res<CharacterTuning>) {
    let size = tuning.size;

    commands
        .spawn((
            Player,
            CharacterState::default(),
            AnimationClock::default(),
            CharacterBody {
                position: tuning.spawn,
            },
            Sprite::from_color(PLACEHOLDER_COLOR, Vec2::splat(size)),
            Transform::from_xyz(0.0, 0.0, 10.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Soft shadow under the feet.
            parent.spawn((
                Sprite::from_color(
                    Color::srgba(0.0, 0.0, 0.0, 0.3),
                    Vec2::new(size * 0.8, 8.0),
                ),
                Transform::from_xyz(0.0, -size / 2.0 - 6.0, -0.1),
            ));
            // Name tag.
            parent.spawn((
                Text2d::new("GIANG"),
                TextFont {
                    font_size: 10.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.24)),
                Transform::from_xyz(0.0, -size / 2.0 - 22.0, 0.1),
            ));
        });

    info!("Character spawned at {:?}", tuning.spawn);
}

/// While settled in idle, roll the blink chance on a fixed interval.
fn idle_blink(
    time: Res<Time>,
    mut timer: ResMut<BlinkTimer>,
    mut rng: ResMut<GameRng>,
    mut query: Query<&mut CharacterState, With<Player>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    for mut state in &mut query {
        if state.action == Action::Idle && rng.0.random_bool(BLINK_CHANCE) {
            state.start_blink();
        }
    }
}

/// Pick the displayed frame. A frame whose asset never loaded falls back to
/// the first loaded frame of the same action, then to a solid placeholder.
fn sync_sprite_frame(
    images: Res<Assets<Image>>,
    library: Res<SpriteLibrary>,
    mut query: Query<(&CharacterState, &AnimationClock, &mut Sprite), With<Player>>,
) {
    for (state, clock, mut sprite) in &mut query {
        let action = clock.action();
        let handle = library
            .frame(action, clock.frame())
            .filter(|h| images.contains(*h))
            .cloned()
            .or_else(|| library.first_loaded(action, &images));

        match handle {
            Some(handle) => {
                sprite.image = handle;
                sprite.color = Color::WHITE;
            }
            None => {
                sprite.image = Handle::default();
                sprite.color = PLACEHOLDER_COLOR;
            }
        }
        sprite.flip_x = state.facing == Facing::Left;
    }
}

/// Map arena coordinates (origin bottom-left) onto the camera's centered
/// world space, lifting the sprite slightly while airborne.
fn sync_transform(
    bounds: Res<ArenaBounds>,
    mut query: Query<(&CharacterBody, &CharacterState, &mut Transform), With<Player>>,
) {
    for (body, state, mut transform) in &mut query {
        let lift = if state.is_jumping { JUMP_LIFT } else { 0.0 };
        transform.translation.x = body.position.x - bounds.width / 2.0;
        transform.translation.y = body.position.y - bounds.height / 2.0 + lift;
    }
}
