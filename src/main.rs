//! Pixelfolio: a gamified CV. A skeleton crusader walks, jumps, and fights
//! its way through the portfolio pages.

mod character;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod overlay;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Pixelfolio - BUI VAN GIANG".to_string(),
                    resolution: (1280, 720).into(),
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        character::CharacterPlugin,
        overlay::OverlayPlugin,
        ui::UiPlugin,
        effects::EffectsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
