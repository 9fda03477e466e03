//! Overlay domain: on-screen touch controls.
//!
//! A virtual D-pad (four momentary directions plus a latching run toggle) and
//! an action cluster (jump, attack, kick, special) that synthesize the same
//! logical key presses as the keyboard. Either cluster can be dragged
//! off-screen to hide it; a floating button restores both.

pub mod buttons;
pub mod drag;


use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::character::{CharacterSet, InputState};
use crate::core::AppState;

pub use buttons::{RunToggle, VirtualButton};
pub use drag::DragState;

/// Window width at or below which the overlay shows even without touch input.
const NARROW_VIEWPORT: f32 = 768.0;

/// Live overlay state. Independent of the character runtime except that
/// virtual buttons inject logical keys into the shared [`InputState`].
#[derive(Resource, Debug, Default)]
pub struct MobileControlRuntime {
    pub dpad_hidden: bool,
    pub actions_hidden: bool,
    pub run_locked: bool,
}

/// Latches once any touch has been observed this session.
#[derive(Resource, Debug, Default)]
pub struct TouchCapability {
    pub seen_touch: bool,
}

/// Which control cluster a UI node belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Dpad,
    Actions,
}

/// Marker for the floating restore-controls button.
#[derive(Component, Debug)]
pub struct RestoreButton;

/// Hide the D-pad: force-release held directions so a finger mid-drag cannot
/// leave the character walking, but preserve the run lock.
pub fn hide_dpad(runtime: &mut MobileControlRuntime, input: &mut InputState) {
    runtime.dpad_hidden = true;
    input.release_directions();
}

/// Hide the action cluster. Action buttons are momentary, nothing to release.
pub fn hide_actions(runtime: &mut MobileControlRuntime) {
    runtime.actions_hidden = true;
}

/// Restore both clusters at once.
pub fn restore_all(runtime: &mut MobileControlRuntime) {
    runtime.dpad_hidden = false;
    runtime.actions_hidden = false;
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MobileControlRuntime>()
            .init_resource::<TouchCapability>()
            .add_systems(OnEnter(AppState::Playing), buttons::spawn_overlay)
            .add_systems(
                Update,
                (
                    drag::drag_clusters,
                    buttons::handle_virtual_buttons,
                    buttons::handle_run_toggle,
                    buttons::handle_restore_button,
                    apply_overlay_visibility,
                )
                    .chain()
                    .in_set(CharacterSet::Input)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Decide what the overlay shows: nothing on wide, touch-free windows;
/// otherwise each cluster unless it was dragged away, plus the restore
/// button while anything is hidden.
fn apply_overlay_visibility(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut capability: ResMut<TouchCapability>,
    runtime: Res<MobileControlRuntime>,
    mut clusters: Query<(&Cluster, &mut Visibility), Without<RestoreButton>>,
    mut restore: Query<&mut Visibility, With<RestoreButton>>,
) {
    if touches.iter().next().is_some() {
        capability.seen_touch = true;
    }
    let narrow = windows
        .single()
        .map(|w| w.width() <= NARROW_VIEWPORT)
        .unwrap_or(false);
    let device_wants_overlay = narrow || capability.seen_touch;

    for (cluster, mut visibility) in &mut clusters {
        let hidden = match cluster {
            Cluster::Dpad => runtime.dpad_hidden,
            Cluster::Actions => runtime.actions_hidden,
        };
        *visibility = if device_wants_overlay && !hidden {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    let any_hidden = runtime.dpad_hidden || runtime.actions_hidden;
    for mut visibility in &mut restore {
        *visibility = if device_wants_overlay && any_hidden {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
