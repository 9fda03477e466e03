//! Overlay domain: virtual button layout and press handling.

use bevy::prelude::*;

use crate::character::{ControlKey, InputState};

use super::drag::DragState;
use super::{Cluster, MobileControlRuntime, RestoreButton};

pub const BUTTON_SIZE: f32 = 50.0;
pub const CLUSTER_SIZE: f32 = 170.0;
pub const CLUSTER_MARGIN: f32 = 20.0;

const BUTTON_BG: Color = Color::srgba(0.1, 0.1, 0.15, 0.7);
const BUTTON_BG_RUN_ON: Color = Color::srgba(0.9, 0.5, 0.1, 0.85);
const BUTTON_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.4);

/// Momentary virtual button: held while the pointer presses it.
#[derive(Component, Debug)]
pub struct VirtualButton {
    pub key: ControlKey,
}

/// The center D-pad button. Latches [`ControlKey::Shift`] on tap instead of
/// acting as a momentary hold.
#[derive(Component, Debug)]
pub struct RunToggle;

/// Previous `Interaction` value, for press/release edge detection.
#[derive(Component, Debug, Default)]
pub struct LastInteraction(pub Interaction);

pub fn spawn_overlay(mut commands: Commands) {
    spawn_dpad(&mut commands);
    spawn_actions(&mut commands);
    spawn_restore(&mut commands);
    info!("Touch overlay spawned (hidden until a touch device is detected)");
}

fn cluster_root(cluster: Cluster) -> (Node, Cluster, DragState, Visibility, ZIndex) {
    let mut node = Node {
        position_type: PositionType::Absolute,
        bottom: Val::Px(CLUSTER_MARGIN),
        width: Val::Px(CLUSTER_SIZE),
        height: Val::Px(CLUSTER_SIZE),
        ..default()
    };
    match cluster {
        Cluster::Dpad => node.left = Val::Px(CLUSTER_MARGIN),
        Cluster::Actions => node.right = Val::Px(CLUSTER_MARGIN),
    }
    (node, cluster, DragState::default(), Visibility::Hidden, ZIndex(50))
}

fn button_node(left: f32, top: f32, width: f32, height: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(left),
        top: Val::Px(top),
        width: Val::Px(width),
        height: Val::Px(height),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        border: UiRect::all(Val::Px(2.0)),
        ..default()
    }
}

fn label(text: &str) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

fn spawn_dpad(commands: &mut Commands) {
    let mid = (CLUSTER_SIZE - BUTTON_SIZE) / 2.0;
    let far = CLUSTER_SIZE - BUTTON_SIZE;
    let directions = [
        (ControlKey::Up, "^", mid, 0.0),
        (ControlKey::Down, "v", mid, far),
        (ControlKey::Left, "<", 0.0, mid),
        (ControlKey::Right, ">", far, mid),
    ];
    commands
        .spawn(cluster_root(Cluster::Dpad))
        .with_children(|parent| {
            for (key, text, left, top) in directions {
                parent
                    .spawn((
                        Button,
                        VirtualButton { key },
                        LastInteraction::default(),
                        button_node(left, top, BUTTON_SIZE, BUTTON_SIZE),
                        BackgroundColor(BUTTON_BG),
                        BorderColor::all(BUTTON_BORDER),
                    ))
                    .with_child(label(text));
            }
            parent
                .spawn((
                    Button,
                    RunToggle,
                    LastInteraction::default(),
                    button_node(mid, mid, BUTTON_SIZE, BUTTON_SIZE),
                    BackgroundColor(BUTTON_BG),
                    BorderColor::all(BUTTON_BORDER),
                ))
                .with_child(label("RUN"));
        });
}

fn spawn_actions(commands: &mut Commands) {
    let small = BUTTON_SIZE;
    let gap = (CLUSTER_SIZE - 3.0 * small) / 2.0;
    let actions = [
        (ControlKey::Attack, "ATK", 0.0),
        (ControlKey::Kick, "KICK", small + gap),
        (ControlKey::Throw, "THRW", 2.0 * (small + gap)),
    ];
    commands
        .spawn(cluster_root(Cluster::Actions))
        .with_children(|parent| {
            // Wide jump bar across the top of the cluster.
            parent
                .spawn((
                    Button,
                    VirtualButton {
                        key: ControlKey::Jump,
                    },
                    LastInteraction::default(),
                    button_node(0.0, 0.0, CLUSTER_SIZE, BUTTON_SIZE),
                    BackgroundColor(BUTTON_BG),
                    BorderColor::all(BUTTON_BORDER),
                ))
                .with_child(label("JUMP"));
            for (key, text, left) in actions {
                parent
                    .spawn((
                        Button,
                        VirtualButton { key },
                        LastInteraction::default(),
                        button_node(left, BUTTON_SIZE + 20.0, small, small),
                        BackgroundColor(BUTTON_BG),
                        BorderColor::all(BUTTON_BORDER),
                    ))
                    .with_child(label(text));
            }
        });
}

fn spawn_restore(commands: &mut Commands) {
    commands
        .spawn((
            Button,
            RestoreButton,
            LastInteraction::default(),
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(CLUSTER_MARGIN),
                left: Val::Percent(50.0),
                // Pull back by half the width so the button centers on
                // mid-screen rather than starting there.
                margin: UiRect::left(Val::Px(-70.0)),
                width: Val::Px(140.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(BUTTON_BG),
            BorderColor::all(BUTTON_BORDER),
            Visibility::Hidden,
            ZIndex(51),
        ))
        .with_child(label("CONTROLS"));
}

/// Translate pointer interaction edges on momentary buttons into logical key
/// presses and releases.
pub fn handle_virtual_buttons(
    mut input: ResMut<InputState>,
    mut buttons: Query<
        (&Interaction, &VirtualButton, &mut LastInteraction),
        Changed<Interaction>,
    >,
) {
    for (interaction, button, mut last) in &mut buttons {
        let was_pressed = last.0 == Interaction::Pressed;
        let is_pressed = *interaction == Interaction::Pressed;
        last.0 = *interaction;
        if is_pressed && !was_pressed {
            input.press(button.key);
        } else if !is_pressed && was_pressed {
            input.release(button.key);
        }
    }
}

/// Flip the run lock on each tap of the center button.
pub fn handle_run_toggle(
    mut input: ResMut<InputState>,
    mut runtime: ResMut<MobileControlRuntime>,
    mut buttons: Query<
        (&Interaction, &mut LastInteraction, &mut BackgroundColor),
        (With<RunToggle>, Changed<Interaction>),
    >,
) {
    for (interaction, mut last, mut color) in &mut buttons {
        let was_pressed = last.0 == Interaction::Pressed;
        last.0 = *interaction;
        if *interaction == Interaction::Pressed && !was_pressed {
            runtime.run_locked = !runtime.run_locked;
            if runtime.run_locked {
                input.press(ControlKey::Shift);
                color.0 = BUTTON_BG_RUN_ON;
            } else {
                input.release(ControlKey::Shift);
                color.0 = BUTTON_BG;
            }
            debug!("Run lock toggled: {}", runtime.run_locked);
        }
    }
}

/// Bring both clusters back and snap them to their home positions.
pub fn handle_restore_button(
    mut runtime: ResMut<MobileControlRuntime>,
    mut buttons: Query<
        (&Interaction, &mut LastInteraction),
        (With<RestoreButton>, Changed<Interaction>),
    >,
    mut clusters: Query<(&Cluster, &mut DragState, &mut Node)>,
) {
    for (interaction, mut last) in &mut buttons {
        let was_pressed = last.0 == Interaction::Pressed;
        last.0 = *interaction;
        if *interaction == Interaction::Pressed && !was_pressed {
            super::restore_all(&mut runtime);
            for (cluster, mut drag, mut node) in &mut clusters {
                drag.reset();
                super::drag::snap_home(*cluster, &mut node);
            }
            info!("Touch controls restored");
        }
    }
}
