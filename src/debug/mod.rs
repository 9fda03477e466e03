//! Debug domain: F1-toggled character state readout (dev-tools builds only).

use bevy::prelude::*;

use crate::character::{AnimationClock, CharacterBody, CharacterState, Player};
use crate::core::AppState;

#[derive(Component, Debug)]
struct DebugReadout;

#[derive(Resource, Debug, Default)]
struct DebugVisible(bool);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugVisible>()
            .add_systems(OnEnter(AppState::Playing), spawn_readout)
            .add_systems(
                Update,
                (toggle_readout, update_readout).run_if(in_state(AppState::Playing)),
            );
    }
}

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        DebugReadout,
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgb(0.4, 1.0, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
        ZIndex(200),
    ));
}

fn toggle_readout(
    keys: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<DebugVisible>,
    mut readouts: Query<&mut Visibility, With<DebugReadout>>,
) {
    if !keys.just_pressed(KeyCode::F1) {
        return;
    }
    visible.0 = !visible.0;
    for mut visibility in &mut readouts {
        *visibility = if visible.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    debug!("Debug readout: {}", visible.0);
}

fn update_readout(
    visible: Res<DebugVisible>,
    players: Query<(&CharacterState, &CharacterBody, &AnimationClock), With<Player>>,
    mut readouts: Query<&mut Text, With<DebugReadout>>,
) {
    if !visible.0 {
        return;
    }
    let Ok((state, body, clock)) = players.single() else {
        return;
    };
    for mut text in &mut readouts {
        *text = Text::new(format!(
            "pos ({:.0}, {:.0})\naction {:?} frame {}\njump {:?} attacking {} moving {}",
            body.position.x,
            body.position.y,
            state.action,
            clock.frame(),
            state.jump_phase(),
            state.is_attacking,
            state.is_moving,
        ));
    }
}
