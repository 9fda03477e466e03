//! Ui domain: CV page panel, dungeon map, help panel, contact form.

pub mod contact;
pub mod help;
pub mod map;
pub mod pages;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::AppState;

/// Which modal panels are currently open. The map and the help panel stack:
/// Escape closes the map first, then the help panel.
#[derive(Resource, Debug, Default)]
pub struct UiPanels {
    pub map_open: bool,
    pub help_open: bool,
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiPanels>()
            .init_resource::<contact::ContactForm>()
            .add_systems(
                OnEnter(AppState::Playing),
                (pages::spawn_page_panel, map::spawn_map, help::spawn_help),
            )
            .add_systems(
                Update,
                (
                    panel_hotkeys,
                    help::handle_help_button,
                    map::handle_map_buttons,
                    contact::handle_send_button,
                    contact::tick_acknowledgment,
                    pages::rebuild_page_panel,
                    map::sync_map,
                    sync_panel_visibility,
                )
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Keyboard shortcuts for the modal panels.
fn panel_hotkeys(keys: Res<ButtonInput<KeyCode>>, mut panels: ResMut<UiPanels>) {
    if keys.just_pressed(KeyCode::KeyM) {
        panels.map_open = !panels.map_open;
    }
    if keys.just_pressed(KeyCode::KeyH) {
        panels.help_open = !panels.help_open;
    }
    if keys.just_pressed(KeyCode::Escape) {
        close_topmost(&mut panels);
    }
}

/// Escape dismisses one panel at a time, map before help.
pub(crate) fn close_topmost(panels: &mut UiPanels) {
    if panels.map_open {
        panels.map_open = false;
    } else if panels.help_open {
        panels.help_open = false;
    }
}

fn sync_panel_visibility(
    panels: Res<UiPanels>,
    mut map: Query<&mut Visibility, (With<map::MapPanel>, Without<help::HelpPanel>)>,
    mut help: Query<&mut Visibility, (With<help::HelpPanel>, Without<map::MapPanel>)>,
) {
    if !panels.is_changed() {
        return;
    }
    for mut visibility in &mut map {
        *visibility = if panels.map_open {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    for mut visibility in &mut help {
        *visibility = if panels.help_open {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Shared panel chrome.
pub(crate) const PANEL_BG: Color = Color::srgba(0.06, 0.06, 0.1, 0.92);
pub(crate) const PANEL_BORDER: Color = Color::srgba(0.9, 0.75, 0.3, 0.8);
pub(crate) const TEXT_DIM: Color = Color::srgb(0.7, 0.7, 0.75);

pub(crate) fn heading(text: impl Into<String>) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(PANEL_BORDER),
    )
}

pub(crate) fn body_line(text: impl Into<String>) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

pub(crate) fn dim_line(text: impl Into<String>) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(TEXT_DIM),
    )
}
