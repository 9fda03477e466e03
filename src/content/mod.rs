//! Content domain: CV data loaded from RON at startup.

pub mod data;
pub mod loader;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::Path;

pub use data::*;
pub use loader::{ContentLoadError, load_cv, parse_cv};

/// Resource wrapping the loaded CV. Pages render from this and nothing else.
#[derive(Resource, Debug, Default)]
pub struct CvContent(pub CvData);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CvContent>()
            .add_systems(Startup, load_content);
    }
}

/// Load the CV file. A missing or malformed file degrades to empty content;
/// the pages still render their headers.
fn load_content(mut content: ResMut<CvContent>) {
    match load_cv(Path::new("assets/data/cv.ron")) {
        Ok(data) => {
            info!(
                "Loaded CV for {} ({} experience entries)",
                data.personal.name,
                data.experience.len()
            );
            content.0 = data;
        }
        Err(e) => {
            error!("{}", e);
        }
    }
}
