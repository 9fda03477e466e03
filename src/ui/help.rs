//! Ui domain: controls help panel and its corner toggle button.

use bevy::prelude::*;

use super::{PANEL_BG, PANEL_BORDER, UiPanels, body_line, dim_line, heading};

/// Marker for the help overlay root.
#[derive(Component, Debug)]
pub struct HelpPanel;

/// Marker for the fixed "?" button in the corner.
#[derive(Component, Debug)]
pub struct HelpButton;

const CONTROLS: [(&str, &str); 8] = [
    ("WASD / Arrows", "Move"),
    ("Shift", "Run"),
    ("Space / J", "Jump"),
    ("X", "Slash"),
    ("C", "Kick"),
    ("V", "Throw"),
    ("Z", "Slide (while moving)"),
    ("M", "Dungeon map"),
];

pub fn spawn_help(mut commands: Commands) {
    commands
        .spawn((
            HelpPanel,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(72.0),
                width: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderColor::all(PANEL_BORDER),
            Visibility::Hidden,
            ZIndex(90),
        ))
        .with_children(|parent| {
            parent.spawn(heading("CONTROLS"));
            for (key, what) in CONTROLS {
                parent.spawn(body_line(format!("{} - {}", key, what)));
            }
            parent.spawn(dim_line("H or ESC closes this panel."));
        });

    commands
        .spawn((
            Button,
            HelpButton,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                width: Val::Px(40.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderColor::all(PANEL_BORDER),
            ZIndex(91),
        ))
        .with_child(heading("?"));
}

pub fn handle_help_button(
    mut panels: ResMut<UiPanels>,
    buttons: Query<&Interaction, (With<HelpButton>, Changed<Interaction>)>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            panels.help_open = !panels.help_open;
        }
    }
}
