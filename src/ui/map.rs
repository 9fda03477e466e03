//! Ui domain: the dungeon map overlay.
//!
//! Each CV page is a room. Rooms the player has visited render cleared;
//! clicking a room navigates there and closes the map.

use bevy::prelude::*;

use crate::core::{Page, PageGraph};

use super::{PANEL_BG, PANEL_BORDER, UiPanels, body_line, dim_line, heading};

const ROOM_BG: Color = Color::srgba(0.12, 0.12, 0.18, 0.9);
const ROOM_BG_VISITED: Color = Color::srgba(0.1, 0.25, 0.12, 0.9);
const ROOM_BORDER_CURRENT: Color = Color::srgb(1.0, 0.9, 0.4);

/// Marker for the map overlay root.
#[derive(Component, Debug)]
pub struct MapPanel;

/// A clickable room on the map.
#[derive(Component, Debug)]
pub struct RoomButton {
    pub page: Page,
}

pub fn spawn_map(mut commands: Commands) {
    commands
        .spawn((
            MapPanel,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(50.0),
                top: Val::Percent(50.0),
                width: Val::Px(340.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                margin: UiRect {
                    left: Val::Px(-170.0),
                    top: Val::Px(-180.0),
                    ..default()
                },
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderColor::all(PANEL_BORDER),
            Visibility::Hidden,
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn(heading("DUNGEON MAP"));
            for page in Page::ALL {
                parent
                    .spawn((
                        Button,
                        RoomButton { page },
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(36.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(ROOM_BG),
                        BorderColor::all(PANEL_BORDER),
                    ))
                    .with_child(body_line(page.title()));
            }
            parent.spawn(dim_line("Visited rooms are cleared. ESC closes."));
        });
}

pub fn handle_map_buttons(
    mut panels: ResMut<UiPanels>,
    mut next_page: ResMut<NextState<Page>>,
    buttons: Query<(&Interaction, &RoomButton), Changed<Interaction>>,
) {
    if !panels.map_open {
        return;
    }
    for (interaction, room) in &buttons {
        if *interaction == Interaction::Pressed {
            info!("Entering room: {}", room.page.title());
            next_page.set(room.page);
            panels.map_open = false;
        }
    }
}

/// Refresh room styling from the visit record and the active page.
pub fn sync_map(
    graph: Res<PageGraph>,
    page: Res<State<Page>>,
    mut rooms: Query<(&RoomButton, &mut BackgroundColor, &mut BorderColor)>,
) {
    for (room, mut bg, mut border) in &mut rooms {
        bg.0 = if graph.is_visited(room.page) {
            ROOM_BG_VISITED
        } else {
            ROOM_BG
        };
        *border = if room.page == *page.get() {
            BorderColor::all(ROOM_BORDER_CURRENT)
        } else {
            BorderColor::all(PANEL_BORDER)
        };
    }
}
